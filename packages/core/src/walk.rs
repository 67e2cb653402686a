//! Depth-first traversal of a filesystem.

use crate::{AssetPath, Error, FileSystem, Metadata};

/// Visit `dir` and everything beneath it, in name order.
///
/// Each directory is yielded before its children. Paths are relative to
/// `fs`, not to `dir`. Returns `Ok(vec![])` if `dir` does not exist, and
/// a single entry if it is a file.
pub fn walk<F: FileSystem + ?Sized>(
    fs: &F,
    dir: &AssetPath,
) -> Result<Vec<(AssetPath, Metadata)>, Error> {
    let mut out = Vec::new();
    if let Some(meta) = fs.stat(dir)? {
        visit(fs, dir.clone(), meta, &mut out)?;
    }
    Ok(out)
}

fn visit<F: FileSystem + ?Sized>(
    fs: &F,
    path: AssetPath,
    meta: Metadata,
    out: &mut Vec<(AssetPath, Metadata)>,
) -> Result<(), Error> {
    let is_dir = meta.is_dir();
    out.push((path.clone(), meta));
    if !is_dir {
        return Ok(());
    }

    for entry in fs.read_dir(&path)?.unwrap_or_default() {
        let child = path.child(&entry.name);
        if let Some(meta) = fs.stat(&child)? {
            visit(fs, child, meta, out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{path, AssetSet, Bytes, SubView};

    fn bundle() -> AssetSet {
        AssetSet::builder()
            .file(path!("static/js/b.js"), Bytes::from_static(b"b"))
            .file(path!("static/index.html"), Bytes::from_static(b"i"))
            .file(path!("static/js/a.js"), Bytes::from_static(b"a"))
            .file(path!("other.txt"), Bytes::from_static(b"o"))
            .build()
            .unwrap()
    }

    fn names(entries: &[(AssetPath, Metadata)]) -> Vec<String> {
        entries.iter().map(|(p, _)| p.to_string()).collect()
    }

    #[test]
    fn walks_depth_first_in_order() {
        let set = bundle();
        let entries = walk(&set, &AssetPath::root()).unwrap();
        assert_eq!(
            names(&entries),
            vec![
                ".",
                "other.txt",
                "static",
                "static/index.html",
                "static/js",
                "static/js/a.js",
                "static/js/b.js",
            ]
        );
    }

    #[test]
    fn walk_subtree() {
        let set = bundle();
        let entries = walk(&set, &path!("static/js")).unwrap();
        assert_eq!(names(&entries), vec!["static/js", "static/js/a.js", "static/js/b.js"]);
    }

    #[test]
    fn walk_view_uses_view_paths() {
        let view = SubView::new(bundle(), path!("static")).unwrap();
        let entries = walk(&view, &AssetPath::root()).unwrap();
        assert_eq!(
            names(&entries),
            vec![".", "index.html", "js", "js/a.js", "js/b.js"]
        );
    }

    #[test]
    fn walk_missing_and_file() {
        let set = bundle();
        assert!(walk(&set, &path!("nope")).unwrap().is_empty());

        let entries = walk(&set, &path!("other.txt")).unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].1.is_file());
    }
}
