use thiserror::Error;
use tracing::warn;

use crate::Coord;

/// Metadata parsed out of a plaintext pattern file.
///
/// `width` and `height` are the bounding box of the grid lines as written,
/// including trailing dead cells; callers use them to place the pattern on
/// a board.
#[derive(Debug, Default)]
pub struct CellFile<'a> {
    pub name: Option<&'a [u8]>,
    pub author: Option<&'a [u8]>,
    pub width: Coord,
    pub height: Coord,
}

#[derive(Debug, Error)]
pub enum CellFileError {
    #[error("Unrecognized byte 0x{got:0X} at row {row}, column {col}")]
    UnrecognizedByte { got: u8, row: Coord, col: Coord },

    #[error("Pattern file contains no grid lines")]
    EmptyPattern,
}

/// Parse the plaintext `.cells` pattern format, calling `f(x, y)` for every
/// live cell. Coordinates are relative to the pattern's top-left corner,
/// `x` growing rightwards and `y` downwards.
///
/// Lines starting with `!` are comments; `!Name:` and `!Author:` carry
/// metadata. Grid lines use `.` for dead and `O` for live. Blank lines
/// count as rows of dead cells.
///
/// See: https://conwaylife.com/wiki/Plaintext
pub fn read_cells<F>(mut bytes: &'_ [u8], mut f: F) -> Result<CellFile<'_>, CellFileError>
where
    F: FnMut(Coord, Coord),
{
    let mut file = CellFile::default();
    let mut row: Coord = 0;

    loop {
        let (Some(line), rest) = take_line(bytes) else {
            break;
        };
        bytes = rest;

        if let Some(comment) = line.strip_prefix(b"!") {
            read_comment(comment, &mut file);
            continue;
        }

        for (col, &b) in line.iter().enumerate() {
            let col = col as Coord;

            match b {
                b'.' => {}
                b'O' => f(col, row),
                got => {
                    return Err(CellFileError::UnrecognizedByte { got, row, col });
                }
            }
        }

        file.width = file.width.max(line.len() as Coord);
        row += 1;
    }

    if row == 0 {
        return Err(CellFileError::EmptyPattern);
    }

    file.height = row;

    Ok(file)
}

fn read_comment<'a>(comment: &'a [u8], file: &mut CellFile<'a>) {
    if let Some(name) = comment.strip_prefix(b"Name:") {
        if file.name.is_some() {
            warn!("Pattern name already defined. Using latest");
        }

        file.name = Some(name.trim_ascii());
    } else if let Some(author) = comment.strip_prefix(b"Author:") {
        if file.author.is_some() {
            warn!("Pattern author already defined. Using latest");
        }

        file.author = Some(author.trim_ascii());
    }
}

/// Take the next line from the slice, without its terminator. A terminator
/// is `\n` or `\r\n`. Returns `None` once the input is exhausted.
fn take_line(bytes: &[u8]) -> (Option<&[u8]>, &[u8]) {
    if bytes.is_empty() {
        return (None, bytes);
    }

    for (i, &b) in bytes.iter().enumerate() {
        if b != b'\n' {
            continue;
        }

        let line = match &bytes[..i] {
            [line @ .., b'\r'] => line,
            line => line,
        };

        return (Some(line), &bytes[i + 1..]);
    }

    // Last line without a trailing newline
    (Some(bytes), &[])
}
