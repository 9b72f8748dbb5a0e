use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::error::SpriteError;

/// One entry of the `list.json` manifest consumed by downstream viewers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub id: u64,
    pub path: String,
}

/// Scan the output folder and write its `list.json` manifest.
///
/// Only numerically-named PNG files (case-insensitive extension) in the
/// folder's immediate entries are listed; entries are sorted strictly
/// ascending by id. Each entry's `path` is relative to the output
/// folder's parent (`<output dir name>/<id>.png`), which is how the
/// gallery viewer fetches the images. Returns the written entries.
pub fn write_manifest(output_dir: &Utf8Path) -> Result<Vec<ManifestEntry>, SpriteError> {
    let dir_name = output_dir.file_name().unwrap_or_default();

    let mut entries: Vec<ManifestEntry> = Vec::new();
    for entry in output_dir.read_dir_utf8()? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_png = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
        if !is_png {
            continue;
        }
        let Some(stem) = path.file_stem() else {
            continue;
        };
        let Ok(id) = stem.parse::<u64>() else {
            continue;
        };
        entries.push(ManifestEntry {
            id,
            path: format!("{dir_name}/{id}.png"),
        });
    }

    entries.sort_by_key(|entry| entry.id);

    let json = serde_json::to_string_pretty(&entries)?;
    std::fs::write(output_dir.join("list.json").as_std_path(), json)?;

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use std::fs::{create_dir_all, File};
    use tempfile::tempdir;

    fn output_dir(temp: &tempfile::TempDir) -> Utf8PathBuf {
        let dir = Utf8PathBuf::from_path_buf(temp.path().to_path_buf())
            .unwrap()
            .join("spritesheets");
        create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn lists_numeric_pngs_sorted_ascending() {
        let temp = tempdir().unwrap();
        let dir = output_dir(&temp);
        for name in ["3.png", "1.png", "10.png", "2.PNG"] {
            File::create(dir.join(name)).unwrap();
        }

        let entries = write_manifest(&dir).unwrap();
        let ids: Vec<u64> = entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 10]);
        assert_eq!(entries[0].path, "spritesheets/1.png");
    }

    #[test]
    fn skips_non_numeric_and_non_png_entries() {
        let temp = tempdir().unwrap();
        let dir = output_dir(&temp);
        for name in ["5.png", "cover.png", "7.jpg", "list.json", "5b.png"] {
            File::create(dir.join(name)).unwrap();
        }

        let entries = write_manifest(&dir).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, 5);
    }

    #[test]
    fn writes_parseable_list_json() {
        let temp = tempdir().unwrap();
        let dir = output_dir(&temp);
        File::create(dir.join("42.png")).unwrap();

        write_manifest(&dir).unwrap();

        let content = std::fs::read_to_string(dir.join("list.json")).unwrap();
        let parsed: Vec<ManifestEntry> = serde_json::from_str(&content).unwrap();
        assert_eq!(
            parsed,
            vec![ManifestEntry {
                id: 42,
                path: "spritesheets/42.png".to_string()
            }]
        );
    }

    #[test]
    fn rewriting_drops_stale_entries() {
        let temp = tempdir().unwrap();
        let dir = output_dir(&temp);
        File::create(dir.join("1.png")).unwrap();
        write_manifest(&dir).unwrap();

        std::fs::remove_file(dir.join("1.png")).unwrap();
        File::create(dir.join("2.png")).unwrap();

        let entries = write_manifest(&dir).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, 2);
    }
}
