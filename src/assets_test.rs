use std::fs;

use super::*;

#[test]
fn resolve_strips_leading_slash() {
    let dir = Path::new("/srv/site");
    assert_eq!(resolve(dir, "/images/img1.jpeg"), Some(PathBuf::from("/srv/site/images/img1.jpeg")));
}

#[test]
fn resolve_rejects_traversal_and_empty() {
    let dir = Path::new("/srv/site");
    assert_eq!(resolve(dir, "/images/../../etc/passwd"), None);
    assert_eq!(resolve(dir, "/"), None);
    assert_eq!(resolve(dir, "/images//a.png"), None);
}

#[test]
fn audit_reports_only_missing_files() {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir_all(tmp.path().join("images")).unwrap();
    fs::write(tmp.path().join("images/img1.jpeg"), b"jpeg").unwrap();

    let report = audit(tmp.path(), &["/images/img1.jpeg", "/images/img11.png"]);
    assert_eq!(report.checked, 2);
    assert_eq!(report.missing, vec!["/images/img11.png".to_owned()]);
    assert!(!report.is_complete());
}

#[test]
fn directories_do_not_count_as_assets() {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir_all(tmp.path().join("images/img1.jpeg")).unwrap();
    let report = audit(tmp.path(), &["/images/img1.jpeg"]);
    assert_eq!(report.missing.len(), 1);
}

#[test]
fn full_site_asset_list_is_complete_when_present() {
    let tmp = tempfile::tempdir().unwrap();
    let required = client::content::assets::required_asset_paths();
    for url in &required {
        let path = resolve(tmp.path(), url).unwrap();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"img").unwrap();
    }
    let report = audit(tmp.path(), &required);
    assert!(report.is_complete());
    assert_eq!(report.checked, required.len());
}
