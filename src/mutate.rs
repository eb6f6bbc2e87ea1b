//! File mutation primitives.
//!
//! Every mutation follows the same discipline: read the entire file,
//! transform it in memory, write the whole buffer back from offset zero.
//! There is no byte-range patching and no rollback — a failure partway
//! through a multi-step pipeline leaves the earlier writes committed.

use std::path::Path;

use crate::error::ScaffoldError;
use crate::fsys::Fsys;

/// Create `path` unless it already exists.
pub fn ensure_dir(fsys: &dyn Fsys, path: &Path) -> Result<(), ScaffoldError> {
    if fsys.exists(path)? {
        return Ok(());
    }
    fsys.create_dir_all(path)?;
    Ok(())
}

/// Insert `fragment` immediately before the first line containing `marker`.
///
/// All other lines are copied unchanged, byte for byte. A file without the
/// marker is a `MarkerNotFound` error and is left untouched.
pub fn insert_before_marker(
    fsys: &dyn Fsys,
    file: &Path,
    marker: &str,
    fragment: &str,
) -> Result<(), ScaffoldError> {
    let content = fsys.read_to_string(file)?;
    let mut out = String::with_capacity(content.len() + fragment.len());
    let mut inserted = false;
    for line in content.split_inclusive('\n') {
        if !inserted && line.contains(marker) {
            out.push_str(fragment);
            inserted = true;
        }
        out.push_str(line);
    }
    if !inserted {
        return Err(ScaffoldError::MarkerNotFound {
            file: file.display().to_string(),
            marker: marker.to_string(),
        });
    }
    fsys.write(file, &out)?;
    Ok(())
}

/// Insert `import_path` as a quoted import line next to the line containing
/// `anchor` — before it when lexicographically smaller, after it otherwise.
///
/// Approximates a two-element sorted import block; the block is not re-sorted
/// as a whole. Skips the write entirely when the import is already present.
pub fn inject_import(
    fsys: &dyn Fsys,
    file: &Path,
    anchor: &str,
    import_path: &str,
) -> Result<(), ScaffoldError> {
    let content = fsys.read_to_string(file)?;
    let quoted = format!("\"{import_path}\"");
    if content.contains(&quoted) {
        return Ok(());
    }

    let import_line = format!("\t{quoted}\n");
    let mut out = String::with_capacity(content.len() + import_line.len());
    let mut injected = false;
    for line in content.split_inclusive('\n') {
        if !injected && line.contains(anchor) {
            injected = true;
            if import_path < anchor {
                out.push_str(&import_line);
                out.push_str(line);
            } else {
                out.push_str(line);
                if !line.ends_with('\n') {
                    out.push('\n');
                }
                out.push_str(&import_line);
            }
        } else {
            out.push_str(line);
        }
    }
    if !injected {
        return Err(ScaffoldError::MarkerNotFound {
            file: file.display().to_string(),
            marker: anchor.to_string(),
        });
    }
    fsys.write(file, &out)?;
    Ok(())
}

/// Append `body` to `file`, prefixing `header` only when the file is new or
/// empty. Prior content is never rewritten.
pub fn populate_file(
    fsys: &dyn Fsys,
    file: &Path,
    header: &str,
    body: &str,
) -> Result<(), ScaffoldError> {
    let empty = !fsys.exists(file)? || fsys.read_to_string(file)?.is_empty();
    if empty {
        fsys.write(file, &format!("{header}{body}"))?;
    } else {
        fsys.append(file, body)?;
    }
    Ok(())
}

/// Write `contents` only when `file` is missing or empty.
///
/// Returns whether a write happened, so callers can log a skip instead of
/// clobbering hand-edited files.
pub fn create_file_if_absent(
    fsys: &dyn Fsys,
    file: &Path,
    contents: &str,
) -> Result<bool, ScaffoldError> {
    if fsys.exists(file)? && !fsys.read_to_string(file)?.is_empty() {
        return Ok(false);
    }
    fsys.write(file, contents)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fsys::MemFsys;

    const MAIN: &str = "package main\n\nimport (\n\t\"gofr.dev/pkg/gofr\"\n)\n\nfunc main() {\n\tk := gofr.New()\n\n\tk.Start()\n}\n";

    #[test]
    fn inserts_fragment_before_marker_line() {
        let fsys = MemFsys::new("/proj");
        fsys.seed("main.go", MAIN);

        insert_before_marker(
            &fsys,
            Path::new("main.go"),
            ".Start(",
            "\tk.GET(\"/widget\", widget.Index)\n",
        )
        .unwrap();

        let out = fsys.contents("main.go").unwrap();
        let reg = out.find("k.GET(\"/widget\"").unwrap();
        let start = out.find("k.Start()").unwrap();
        assert!(reg < start);
        // everything else survives byte for byte
        assert!(out.starts_with("package main\n\nimport (\n"));
        assert!(out.ends_with("\tk.Start()\n}\n"));
    }

    #[test]
    fn only_first_marker_line_receives_the_fragment() {
        let fsys = MemFsys::new("/proj");
        fsys.seed("main.go", "a.Start()\nb.Start()\n");

        insert_before_marker(&fsys, Path::new("main.go"), ".Start(", "X\n").unwrap();

        assert_eq!(fsys.contents("main.go").unwrap(), "X\na.Start()\nb.Start()\n");
    }

    #[test]
    fn missing_marker_is_an_error_and_leaves_file_untouched() {
        let fsys = MemFsys::new("/proj");
        fsys.seed("main.go", "package main\n");

        let err = insert_before_marker(&fsys, Path::new("main.go"), ".Start(", "X\n").unwrap_err();
        assert!(err.to_string().contains(".Start("));
        assert_eq!(fsys.contents("main.go").unwrap(), "package main\n");
    }

    #[test]
    fn import_smaller_than_anchor_goes_before_it() {
        let fsys = MemFsys::new("/proj");
        fsys.seed("main.go", MAIN);

        inject_import(
            &fsys,
            Path::new("main.go"),
            "gofr.dev/pkg/gofr",
            "app/http/widget",
        )
        .unwrap();

        let out = fsys.contents("main.go").unwrap();
        let new_import = out.find("\"app/http/widget\"").unwrap();
        let anchor = out.find("\"gofr.dev/pkg/gofr\"").unwrap();
        assert!(new_import < anchor);
    }

    #[test]
    fn import_greater_than_anchor_goes_after_it() {
        let fsys = MemFsys::new("/proj");
        fsys.seed("main.go", MAIN);

        inject_import(
            &fsys,
            Path::new("main.go"),
            "gofr.dev/pkg/gofr",
            "zoo/http/widget",
        )
        .unwrap();

        let out = fsys.contents("main.go").unwrap();
        let anchor = out.find("\"gofr.dev/pkg/gofr\"").unwrap();
        let new_import = out.find("\"zoo/http/widget\"").unwrap();
        assert!(anchor < new_import);
    }

    #[test]
    fn existing_import_is_not_duplicated() {
        let fsys = MemFsys::new("/proj");
        fsys.seed("main.go", MAIN);

        inject_import(&fsys, Path::new("main.go"), "gofr.dev/pkg/gofr", "app/http/widget").unwrap();
        inject_import(&fsys, Path::new("main.go"), "gofr.dev/pkg/gofr", "app/http/widget").unwrap();

        let out = fsys.contents("main.go").unwrap();
        assert_eq!(out.matches("\"app/http/widget\"").count(), 1);
    }

    #[test]
    fn populate_prefixes_header_exactly_once() {
        let fsys = MemFsys::new("/proj");
        let file = Path::new("http/widget/widget.go");
        fsys.create_dir_all(Path::new("http/widget")).unwrap();

        populate_file(&fsys, file, "package widget\n", "func Index() {}\n").unwrap();
        populate_file(&fsys, file, "package widget\n", "func Create() {}\n").unwrap();

        let out = fsys.contents("http/widget/widget.go").unwrap();
        assert_eq!(out.matches("package widget").count(), 1);
        assert!(out.contains("func Index"));
        assert!(out.contains("func Create"));
    }

    #[test]
    fn populate_treats_empty_existing_file_as_new() {
        let fsys = MemFsys::new("/proj");
        fsys.seed("core/interface.go", "");

        populate_file(&fsys, Path::new("core/interface.go"), "package core\n", "type T interface {}\n")
            .unwrap();

        assert!(fsys
            .contents("core/interface.go")
            .unwrap()
            .starts_with("package core\n"));
    }

    #[test]
    fn create_if_absent_skips_non_empty_files() {
        let fsys = MemFsys::new("/proj");
        fsys.seed("models/brand.go", "package models\n// hand edited\n");

        let wrote = create_file_if_absent(&fsys, Path::new("models/brand.go"), "new").unwrap();

        assert!(!wrote);
        assert!(fsys.contents("models/brand.go").unwrap().contains("hand edited"));
    }

    #[test]
    fn ensure_dir_tolerates_existing_directory() {
        let fsys = MemFsys::new("/proj");
        fsys.create_dir_all(Path::new("core")).unwrap();
        ensure_dir(&fsys, Path::new("core")).unwrap();
        ensure_dir(&fsys, Path::new("core/brand")).unwrap();
        assert!(fsys.has_dir("core/brand"));
    }
}
