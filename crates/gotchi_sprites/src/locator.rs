use camino::{Utf8Path, Utf8PathBuf};

use crate::alias::map_collateral_alias;

/// Extension variants probed in order before falling back to a directory
/// scan. Trait art is exported inconsistently across these six spellings.
const EXTENSIONS: [&str; 6] = [".png", ".PNG", ".jpg", ".JPG", ".jpeg", ".JPEG"];

/// Resolve a `(folder, trait value)` pair to a concrete file on disk.
///
/// The value is first mapped through the collateral alias table, then
/// probed as `<base>/Trait Files/Sprites/<folder…>/<value><ext>` for each
/// extension variant in order. If none exists and the search directory
/// does, its immediate entries are scanned once for a file whose stem
/// equals the mapped value case-insensitively. `None` means a missing
/// image, reported as a diagnostic rather than an error.
pub fn locate_asset(base_path: &Utf8Path, folder: &str, trait_value: &str) -> Option<Utf8PathBuf> {
    let mapped = map_collateral_alias(trait_value);

    let mut search_dir = base_path.join("Trait Files").join("Sprites");
    for segment in folder.split('/') {
        search_dir.push(segment);
    }

    for ext in EXTENSIONS {
        let candidate = search_dir.join(format!("{mapped}{ext}"));
        if candidate.is_file() {
            return Some(candidate);
        }
    }

    if search_dir.is_dir() {
        let entries = search_dir.read_dir_utf8().ok()?;
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_file()
                && path
                    .file_stem()
                    .is_some_and(|stem| stem.eq_ignore_ascii_case(mapped))
            {
                return Some(path.to_path_buf());
            }
        }
    }

    None
}
