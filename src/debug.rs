use std::borrow::Cow;
use std::time::Instant;

use log::debug;

/// Logs the time elapsed between its creation and drop.
pub struct Timing {
    start: Instant,
    msg: Cow<'static, str>,
}

impl Timing {
    pub fn new(msg: impl Into<Cow<'static, str>>) -> Self {
        Self {
            start: Instant::now(),
            msg: msg.into(),
        }
    }
}

impl Drop for Timing {
    #[inline]
    fn drop(&mut self) {
        let elapsed = Instant::now().duration_since(self.start);
        debug!("[{:?}] {}", elapsed, self.msg)
    }
}

macro_rules! TIME {
    () => {
        let _x = $crate::debug::Timing::new("TIME!");
    };
    ($msg: expr) => {
        let _x = $crate::debug::Timing::new($msg);
    };
}
pub(crate) use TIME;
