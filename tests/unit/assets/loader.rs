use std::io::Cursor;

use super::*;

fn temp_dir(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "maskpipe_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

#[test]
fn normalize_rel_path_cleans_separators_and_dots() {
    assert_eq!(normalize_rel_path("a/./b//c.png").unwrap(), "a/b/c.png");
    assert_eq!(normalize_rel_path("a\\b.png").unwrap(), "a/b.png");
}

#[test]
fn normalize_rel_path_rejects_escapes() {
    assert!(normalize_rel_path("/abs.png").is_err());
    assert!(normalize_rel_path("../up.png").is_err());
    assert!(normalize_rel_path("").is_err());
    assert!(normalize_rel_path("./").is_err());
}

#[test]
fn fs_loader_fetches_and_decodes() {
    let tmp = temp_dir("fs_loader_fetch");
    std::fs::create_dir_all(&tmp).unwrap();

    let img = image::RgbaImage::from_raw(2, 1, vec![0, 0, 0, 10, 0, 0, 0, 20]).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    std::fs::write(tmp.join("m.png"), &buf).unwrap();

    let loader = FsLoader::new(&tmp);
    let fetched = loader.fetch("m.png").unwrap();
    assert_eq!((fetched.width(), fetched.height()), (2, 1));
    assert_eq!(fetched.pixel(1, 0), Some([0, 0, 0, 20]));

    let _ = std::fs::remove_dir_all(&tmp);
}

#[test]
fn fs_loader_missing_file_is_a_load_error() {
    let loader = FsLoader::new(std::env::temp_dir());
    let err = loader.fetch("maskpipe_definitely_missing.png").unwrap_err();
    assert!(matches!(err, MaskError::Load(_)), "got {err:?}");
}

#[test]
fn fs_loader_undecodable_file_is_a_load_error() {
    let tmp = temp_dir("fs_loader_garbage");
    std::fs::create_dir_all(&tmp).unwrap();
    std::fs::write(tmp.join("junk.png"), b"junk").unwrap();

    let loader = FsLoader::new(&tmp);
    let err = loader.fetch("junk.png").unwrap_err();
    assert!(matches!(err, MaskError::Load(_)), "got {err:?}");

    let _ = std::fs::remove_dir_all(&tmp);
}
