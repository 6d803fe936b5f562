#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Leading bytes for each built-in signature, with the expected label.
pub const SIGNATURE_FIXTURES: &[(&str, &[u8], &str)] = &[
    ("script.sh", b"#!/bin/sh\necho hi\n", "Shell script"),
    ("data.db", b"SQLite format 3\0\x10\x00\x01\x01", "SQLite database"),
    ("favicon.ico", &[0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x10, 0x10], "Computer ICO icon file"),
    ("anim.gif", b"GIF89a\x10\x00\x10\x00", "GIF"),
    ("photo.jpg", &[0xFF, 0xD8, 0xFF, 0xEE, 0x00, 0x0E], "JPG"),
    ("bundle.rar", &[0x52, 0x61, 0x72, 0x21, 0x1A, 0x07, 0x01, 0x00], "RAR"),
    ("image.png", b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR", "PNG"),
    ("Main.class", &[0xCA, 0xFE, 0xBA, 0xBE, 0x00, 0x00, 0x00, 0x41], "Java class file"),
    ("paper.pdf", b"%PDF-1.7\n%\xE2\xE3\xCF\xD3\n", "PDF"),
    ("song.mp3", b"ID3\x04\x00\x00\x00\x00\x00\x00", "MP3"),
    // the ISO 9660 descriptor sits past the prefix in real images
    ("live.iso", b"CD001\x01\x00", "ISO"),
    ("ext.crx", b"Cr24\x03\x00\x00\x00", "Chrome extension archive"),
    ("clip.mp4", &[0x00, 0x00, 0x00, 0x18, 0x66, 0x74, 0x79, 0x70, 0x6D, 0x70, 0x34, 0x32], "MP4"),
];

pub struct FixtureDir {
    pub dir: TempDir,
}

impl FixtureDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn write(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn missing(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
