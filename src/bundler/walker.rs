//! Recursive module-directory traversal.

use std::path::{Path, PathBuf};

use futures::FutureExt;
use futures::future::{BoxFuture, try_join_all};
use tokio::fs;

use crate::error::{BundleError, Result};

/// One discovered file: where it lives on disk and what the bundle calls it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLocation {
    /// Absolute or request-relative filesystem path
    pub path: PathBuf,
    /// Virtual module name, `/`-joined relative to the walk root
    pub module_name: String,
}

/// Enumerates every regular file under `root`.
///
/// Directories recurse with their name appended to the running prefix.
/// Entries are statted without following symlinks, so links (and sockets,
/// fifos, devices) are skipped rather than traversed. Sibling entries are
/// visited concurrently and the returned order carries no guarantee;
/// callers sort or hash-normalize.
///
/// A directory that cannot be listed fails the walk with
/// [`BundleError::DirectoryUnreadable`]; an entry that cannot be statted
/// fails it with [`BundleError::FileUnreadable`].
pub async fn walk(root: &Path) -> Result<Vec<FileLocation>> {
    walk_dir(root.to_path_buf(), String::new()).await
}

fn walk_dir(dir: PathBuf, prefix: String) -> BoxFuture<'static, Result<Vec<FileLocation>>> {
    async move {
        let mut listing = fs::read_dir(&dir)
            .await
            .map_err(|source| BundleError::DirectoryUnreadable {
                path: dir.clone(),
                source,
            })?;

        let mut children = Vec::new();
        while let Some(entry) =
            listing
                .next_entry()
                .await
                .map_err(|source| BundleError::DirectoryUnreadable {
                    path: dir.clone(),
                    source,
                })?
        {
            let name = entry.file_name().to_string_lossy().into_owned();
            children.push((entry.path(), format!("{prefix}{name}")));
        }

        let visits = children
            .into_iter()
            .map(|(path, module_name)| visit(path, module_name));
        let found = try_join_all(visits).await?;
        Ok(found.into_iter().flatten().collect())
    }
    .boxed()
}

async fn visit(path: PathBuf, module_name: String) -> Result<Vec<FileLocation>> {
    let stat = fs::symlink_metadata(&path)
        .await
        .map_err(|source| BundleError::FileUnreadable {
            path: path.clone(),
            source,
        })?;

    if stat.is_file() {
        log::trace!("module file {} as \"{module_name}\"", path.display());
        Ok(vec![FileLocation { path, module_name }])
    } else if stat.is_dir() {
        walk_dir(path, format!("{module_name}/")).await
    } else {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use std::fs as stdfs;

    use super::*;

    fn names(mut found: Vec<FileLocation>) -> Vec<String> {
        found.sort_by(|a, b| a.module_name.cmp(&b.module_name));
        found.into_iter().map(|f| f.module_name).collect()
    }

    #[tokio::test]
    async fn finds_nested_files_with_joined_names() {
        let dir = tempfile::tempdir().unwrap();
        stdfs::write(dir.path().join("index.ts"), "export {};").unwrap();
        stdfs::create_dir_all(dir.path().join("lib/deep")).unwrap();
        stdfs::write(dir.path().join("lib/util.ts"), "export {};").unwrap();
        stdfs::write(dir.path().join("lib/deep/data.json"), "{}").unwrap();

        let found = walk(dir.path()).await.unwrap();
        assert_eq!(
            names(found),
            vec!["index.ts", "lib/deep/data.json", "lib/util.ts"]
        );
    }

    #[tokio::test]
    async fn empty_directory_yields_no_locations() {
        let dir = tempfile::tempdir().unwrap();
        let found = walk(dir.path()).await.unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn missing_root_is_directory_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = walk(&missing).await.unwrap_err();
        assert!(matches!(err, BundleError::DirectoryUnreadable { path, .. } if path == missing));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn symlinks_are_skipped_not_followed() {
        let dir = tempfile::tempdir().unwrap();
        stdfs::write(dir.path().join("real.txt"), "hi").unwrap();
        std::os::unix::fs::symlink(dir.path().join("real.txt"), dir.path().join("link.txt"))
            .unwrap();
        // Dangling links must not fail the walk either.
        std::os::unix::fs::symlink("missing-target", dir.path().join("dangling")).unwrap();

        let found = walk(dir.path()).await.unwrap();
        assert_eq!(names(found), vec!["real.txt"]);
    }

    #[tokio::test]
    async fn paths_point_back_into_the_root() {
        let dir = tempfile::tempdir().unwrap();
        stdfs::create_dir_all(dir.path().join("sub")).unwrap();
        stdfs::write(dir.path().join("sub/a.txt"), "a").unwrap();

        let found = walk(dir.path()).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].path, dir.path().join("sub").join("a.txt"));
        assert_eq!(found[0].module_name, "sub/a.txt");
    }
}
