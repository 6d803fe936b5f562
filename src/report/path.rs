use std::path::is_separator;

/// Everything after the last path separator, or the whole path.
pub fn file_name(path: &str) -> &str {
    path.rsplit(is_separator).next().unwrap_or(path)
}

/// Text after the last '.' of the final path segment, without the dot.
///
/// Dots in directory components are ignored, so `a.b/name` has no extension.
pub fn file_extension(path: &str) -> &str {
    let name = file_name(path);
    name.rfind('.').map_or("", |dot| &name[dot + 1..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_strips_directories() {
        assert_eq!(file_name("/home/user/notes.txt"), "notes.txt");
        assert_eq!(file_name("relative/dir/image.png"), "image.png");
    }

    #[test]
    fn test_file_name_without_separator() {
        assert_eq!(file_name("notes.txt"), "notes.txt");
        assert_eq!(file_name(""), "");
    }

    #[test]
    fn test_file_name_trailing_separator() {
        assert_eq!(file_name("some/dir/"), "");
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("notes.txt"), "txt");
        assert_eq!(file_extension("/tmp/archive.tar.gz"), "gz");
        assert_eq!(file_extension("Makefile"), "");
        assert_eq!(file_extension("trailing."), "");
    }

    #[test]
    fn test_file_extension_ignores_dotted_directories() {
        assert_eq!(file_extension("a.b/name"), "");
        assert_eq!(file_extension("/home/user/.config/settings"), "");
        assert_eq!(file_extension("v1.2/build.sh"), "sh");
    }

    #[test]
    fn test_file_extension_hidden_file() {
        assert_eq!(file_extension(".bashrc"), "bashrc");
    }
}
