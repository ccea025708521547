use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use log::{debug, warn};

use super::{ResourceKey, Symbol, Variant};

const COLOR_DESCRIPTOR: &str = "color.txt";
const AUDIO_EXTENSIONS: [&str; 2] = ["wav", "ogg"];

/// What the letter store can answer about its contents. Backed by the
/// filesystem in the app; tests substitute an in-memory map.
pub trait VariantCatalog {
    /// Variant names available for a symbol, in a stable order.
    fn list_variants(&self, symbol: Symbol) -> Vec<Variant>;
    /// First line of the key's background color descriptor, if readable.
    fn color_descriptor(&self, key: &ResourceKey) -> Option<String>;
    /// Asset-relative path of the key's audio clip, if one exists.
    fn audio_source(&self, key: &ResourceKey) -> Option<PathBuf>;
}

/// On-disk store layout: one directory per symbol, one subdirectory per
/// variant. A variant directory optionally holds `color.txt` and an audio
/// clip named after the variant.
pub struct FsCatalog {
    store: PathBuf,
    asset_prefix: PathBuf,
}

impl FsCatalog {
    /// `store` is where the directories live on disk; `asset_prefix` is the
    /// same location as the asset server sees it.
    pub fn new(store: impl Into<PathBuf>, asset_prefix: impl Into<PathBuf>) -> Self {
        Self {
            store: store.into(),
            asset_prefix: asset_prefix.into(),
        }
    }

    fn variant_dir(&self, key: &ResourceKey) -> PathBuf {
        self.store.join(key.symbol.to_string()).join(&key.variant)
    }
}

impl VariantCatalog for FsCatalog {
    fn list_variants(&self, symbol: Symbol) -> Vec<Variant> {
        let namespace = self.store.join(symbol.to_string());
        let entries = match fs::read_dir(&namespace) {
            Ok(entries) => entries,
            Err(error) => {
                if error.kind() == ErrorKind::NotFound {
                    debug!("no namespace for {symbol} under {}", self.store.display());
                } else {
                    warn!("cannot list {}: {error}", namespace.display());
                }
                return Vec::new();
            }
        };

        let mut variants: Vec<Variant> = entries
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().map(|kind| kind.is_dir()).unwrap_or(false))
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();
        variants.sort();
        variants
    }

    fn color_descriptor(&self, key: &ResourceKey) -> Option<String> {
        let path = self.variant_dir(key).join(COLOR_DESCRIPTOR);
        match fs::read_to_string(&path) {
            Ok(raw) => raw
                .lines()
                .next()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_owned),
            Err(error) => {
                if error.kind() != ErrorKind::NotFound {
                    warn!("unreadable color descriptor {}: {error}", path.display());
                }
                None
            }
        }
    }

    fn audio_source(&self, key: &ResourceKey) -> Option<PathBuf> {
        AUDIO_EXTENSIONS.iter().find_map(|extension| {
            let file_name = format!("{}.{extension}", key.variant);
            self.variant_dir(key).join(&file_name).is_file().then(|| {
                self.asset_prefix
                    .join(key.symbol.to_string())
                    .join(&key.variant)
                    .join(file_name)
            })
        })
    }
}


#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn sym(ch: char) -> Symbol {
        Symbol::from_payload(&ch.to_string()).expect("test symbol should parse")
    }

    fn key(symbol: char, variant: &str) -> ResourceKey {
        ResourceKey {
            symbol: sym(symbol),
            variant: variant.to_owned(),
        }
    }

    /// A/cat holds a descriptor and a clip, A/apple is bare, B is an empty
    /// namespace, and A also contains a stray file that must be ignored.
    fn scratch_store() -> (tempfile::TempDir, FsCatalog) {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let root = dir.path();
        fs::create_dir_all(root.join("A/cat")).expect("A/cat should be created");
        fs::create_dir_all(root.join("A/apple")).expect("A/apple should be created");
        fs::create_dir_all(root.join("B")).expect("B should be created");
        fs::write(root.join("A/cat/color.txt"), "white\nsecond line ignored\n")
            .expect("descriptor should be written");
        fs::write(root.join("A/cat/cat.wav"), b"").expect("clip should be written");
        fs::write(root.join("A/notes.txt"), "not a variant").expect("stray file should be written");

        let catalog = FsCatalog::new(root, "letters");
        (dir, catalog)
    }

    #[test]
    fn lists_variant_directories_sorted() {
        let (_dir, catalog) = scratch_store();
        assert_eq!(catalog.list_variants(sym('A')), vec!["apple", "cat"]);
    }

    #[test]
    fn empty_and_missing_namespaces_list_nothing() {
        let (_dir, catalog) = scratch_store();
        assert!(catalog.list_variants(sym('B')).is_empty());
        assert!(catalog.list_variants(sym('Z')).is_empty());
    }

    #[test]
    fn reads_the_first_descriptor_line_trimmed() {
        let (_dir, catalog) = scratch_store();
        assert_eq!(
            catalog.color_descriptor(&key('A', "cat")),
            Some(String::from("white"))
        );
    }

    #[test]
    fn missing_descriptor_is_none() {
        let (_dir, catalog) = scratch_store();
        assert_eq!(catalog.color_descriptor(&key('A', "apple")), None);
    }

    #[test]
    fn audio_source_is_asset_relative() {
        let (_dir, catalog) = scratch_store();
        assert_eq!(
            catalog.audio_source(&key('A', "cat")),
            Some(PathBuf::from("letters/A/cat/cat.wav"))
        );
    }

    #[test]
    fn missing_audio_is_none() {
        let (_dir, catalog) = scratch_store();
        assert_eq!(catalog.audio_source(&key('A', "apple")), None);
    }

    #[test]
    fn blank_descriptor_is_none() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        fs::create_dir_all(dir.path().join("C/car")).expect("C/car should be created");
        fs::write(dir.path().join("C/car/color.txt"), "\n").expect("descriptor should be written");

        let catalog = FsCatalog::new(dir.path(), "letters");
        assert_eq!(catalog.color_descriptor(&key('C', "car")), None);
    }
}
