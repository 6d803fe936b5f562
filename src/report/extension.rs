/// Label used when the extension is not in the table.
pub const UNKNOWN_EXTENSION: &str = "Unknown";

/// Describes a file from its extension. Matching is exact and case-sensitive.
pub fn extension_type(extension: &str) -> &'static str {
    match extension {
        "txt" => "Text File",
        "c" => "C Source File",
        "cpp" => "C++ Source File",
        "h" => "C/C++ Header File",
        "lnk" => "Windows Shortcut",
        "java" => "Java Source File",
        "class" => "Java Class File",
        "sh" => "Shell script",
        "pdf" => "PDF",
        "crx" => "Chrome Extension",
        "mp3" => "MP3 File",
        "mp4" => "MP4 File",
        "zip" => "ZIP Archive",
        "ico" => "Computer ICO File",
        "gif" => "GIF",
        "jpg" => "JPG Image",
        "png" => "PNG Image",
        "iso" => "ISO Live Disk",
        _ => UNKNOWN_EXTENSION,
    }
}
