use crate::attributes::FileKind;

const BITS: [(u32, char); 9] = [
    (0o400, 'r'),
    (0o200, 'w'),
    (0o100, 'x'),
    (0o040, 'r'),
    (0o020, 'w'),
    (0o010, 'x'),
    (0o004, 'r'),
    (0o002, 'w'),
    (0o001, 'x'),
];

/// Renders `ls -l` style permissions, e.g. `-rwxr-xr--`.
pub fn render_permissions(kind: FileKind, mode: u32) -> String {
    let type_char = match kind {
        FileKind::Directory => 'd',
        FileKind::Symlink => 'l',
        FileKind::RegularFile | FileKind::Unknown => '-',
    };

    std::iter::once(type_char)
        .chain(
            BITS.iter()
                .map(|&(bit, c)| if mode & bit != 0 { c } else { '-' }),
        )
        .collect()
}
