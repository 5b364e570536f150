use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::RgbaImage;
use log::debug;
use tempfile::NamedTempFile;

use crate::debug::TIME;
use crate::dimension::Dimension;
use crate::error::{IconError, Result};
use crate::variant::ResizedVariant;

/// Packs the variants into an icon directory, one entry each, in order.
/// Every entry declares the size of the variant it holds.
pub fn encode(variants: Vec<ResizedVariant>) -> Result<IconDir> {
    let mut icon_dir = IconDir::new(ResourceType::Icon);

    for variant in variants {
        let size = variant.dimension();
        let image = IconImage::from_rgba_data(size.width, size.height, variant.into_raw());
        let entry = IconDirEntry::encode(&image)
            .map_err(|e| IconError::encoding(format!("{size} entry: {e}")))?;
        debug!(
            "encoded {size} entry as {} ({} bytes)",
            if entry.is_png() { "png" } else { "bmp" },
            entry.data().len()
        );
        icon_dir.add_entry(entry);
    }

    Ok(icon_dir)
}

/// Writes `icon_dir` next to `output` under a temporary name, then renames it
/// into place. A failed write never leaves a partial file at `output`.
pub fn write_atomic(icon_dir: &IconDir, output: &Path) -> Result<()> {
    TIME!(format!("write {}", output.display()));

    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let tmp = NamedTempFile::new_in(dir).map_err(|e| IconError::output_unwritable(dir, e))?;
    {
        let mut writer = BufWriter::new(tmp.as_file());
        icon_dir
            .write(&mut writer)
            .and_then(|_| writer.flush())
            .map_err(|e| IconError::output_unwritable(tmp.path(), e))?;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .map_err(|e| IconError::output_unwritable(tmp.path(), e))?;
    }

    tmp.persist(output)
        .map_err(|e| IconError::output_unwritable(output, e.error))?;

    Ok(())
}

/// Decodes every entry of an icon file, in directory order.
pub fn read_icon(path: &Path) -> Result<Vec<RgbaImage>> {
    let file = File::open(path).map_err(|e| IconError::source_unreadable(path, e))?;
    let icon_dir =
        IconDir::read(BufReader::new(file)).map_err(|e| IconError::source_unreadable(path, e))?;

    icon_dir
        .entries()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let image = entry
                .decode()
                .map_err(|e| IconError::source_unreadable(path, format!("entry {i}: {e}")))?;
            let declared = Dimension::new(entry.width(), entry.height());
            let actual = Dimension::new(image.width(), image.height());
            if declared != actual {
                return Err(IconError::encoding(format!(
                    "entry {i} declares {declared} but holds {actual}"
                )));
            }
            RgbaImage::from_raw(actual.width, actual.height, image.rgba_data().to_vec())
                .ok_or_else(|| IconError::encoding(format!("entry {i}: short pixel buffer")))
        })
        .collect()
}

/// Pixel size of every entry of an icon file, in directory order.
pub fn read_icon_sizes(path: &Path) -> Result<Vec<Dimension>> {
    Ok(read_icon(path)?
        .iter()
        .map(|img| Dimension::new(img.width(), img.height()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SourceImage;
    use crate::variant::resize_all;
    use image::{DynamicImage, Rgba};
    use std::fs;

    fn variants(targets: &[Dimension]) -> Vec<ResizedVariant> {
        let img = RgbaImage::from_pixel(64, 64, Rgba([10, 120, 230, 255]));
        let source = SourceImage::from_image(DynamicImage::ImageRgba8(img)).unwrap();
        resize_all(&source, targets)
    }

    #[test]
    fn entries_declare_their_own_size() {
        let targets = [Dimension::square(16), Dimension::new(48, 32), Dimension::square(256)];
        let icon_dir = encode(variants(&targets)).unwrap();
        let declared: Vec<Dimension> = icon_dir
            .entries()
            .iter()
            .map(|e| Dimension::new(e.width(), e.height()))
            .collect();
        assert_eq!(declared, targets);
    }

    #[test]
    fn write_then_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("app.ico");
        let targets = [Dimension::square(32), Dimension::square(16)];
        write_atomic(&encode(variants(&targets)).unwrap(), &out).unwrap();

        assert_eq!(read_icon_sizes(&out).unwrap(), targets);
        let images = read_icon(&out).unwrap();
        assert_eq!(images[1].get_pixel(8, 8).0, [10, 120, 230, 255]);
    }

    #[test]
    fn failed_rename_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("taken");
        fs::create_dir(&out).unwrap();
        fs::write(out.join("keep"), b"x").unwrap();

        let icon_dir = encode(variants(&[Dimension::square(16)])).unwrap();
        let err = write_atomic(&icon_dir, &out).unwrap_err();
        assert!(matches!(err, IconError::OutputUnwritable { .. }));

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec!["taken"]);
    }

    #[test]
    fn reading_garbage_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.ico");
        fs::write(&path, b"\x00\x00\x07\x00").unwrap();
        assert!(read_icon_sizes(&path).is_err());
    }
}
