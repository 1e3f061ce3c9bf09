/**********************************************
  > File Name		: data_file.rs
  > Author		    : lunar
  > Email			: lunar_ubuntu@qq.com
  > Created Time	: Fri 02 Apr 2021 11:28:19 AM CST
  > Location        : Shanghai
  > Copyright@ https://github.com/xiaoqixian
 **********************************************/

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Lines, Write};
use std::path::Path;
use log::{*};

use super::{FORMAT_TAG, VERSION};
use crate::errors::{CodecError, CodecResult};
use crate::record_management::BookList;
use crate::utils;

/*
 * Write the whole list to path, replacing what is there.
 *
 * Success is only reported after the buffered writer is flushed
 * and the file is synced, so a failed flush or close is never
 * swallowed. If anything fails after the file was created, the
 * half written file is removed.
 */
pub fn save<P: AsRef<Path>>(list: &BookList, path: P) -> CodecResult<()> {
    let path = path.as_ref();
    let fp = File::create(path)?;

    let res = match write_list(list, fp) {
        Ok(fp) => fp.sync_all().map_err(CodecError::from),
        Err(e) => Err(e),
    };
    match res {
        Ok(()) => {
            info!("saved {} books of list {} to {}", list.len(), list.name(), path.display());
            Ok(())
        },
        Err(e) => {
            error!("writing {} failed: {}", path.display(), e);
            remove_partial(path);
            Err(e)
        }
    }
}

/*
 * Write header, properties and books to writer and flush it.
 * The inner writer is handed back so a file can still be synced.
 */
pub(super) fn write_list<W: Write>(list: &BookList, writer: W) -> CodecResult<W> {
    let mut writer = BufWriter::new(writer);
    writeln!(writer, "{} {}", FORMAT_TAG, VERSION)?;
    writeln!(writer, "{} {}", list.name(), list.len())?;
    for book in list.iter() {
        writeln!(writer, "{}", book)?;
    }
    writer.flush()?;
    let inner = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(inner)
}

//only regular files are removed, a device or fifo given as path is left alone.
pub(super) fn remove_partial(path: &Path) {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_file() => {
            if let Err(e) = fs::remove_file(path) {
                warn!("could not remove partial file {}: {}", path.display(), e);
            }
        },
        Ok(_) => {
            warn!("{} is not a regular file, not removed", path.display());
        },
        Err(e) => {
            warn!("could not stat partial file {}: {}", path.display(), e);
        }
    }
}

/*
 * Read a list back from path.
 *
 * A missing file is CodecError::NotFound, the caller is expected
 * to start with a fresh list. Otherwise either the whole list is
 * returned or an error, never a partially filled list.
 */
pub fn load<P: AsRef<Path>>(path: P, index_buckets: usize) -> CodecResult<BookList> {
    let path = path.as_ref();
    let fp = match File::open(path) {
        Ok(v) => v,
        Err(e) => match e.kind() {
            ErrorKind::NotFound => {
                info!("data file {} not found", path.display());
                return Err(CodecError::NotFound);
            },
            _ => {
                return Err(CodecError::Io(e));
            }
        }
    };

    let mut lines = BufReader::new(fp).lines();

    //line 1: format tag and version.
    let header = match next_line(&mut lines, 1)? {
        Some(v) => v,
        None => {
            return Err(CodecError::corrupt(1, "empty file"));
        }
    };
    let fields = utils::split_fields(&header);
    if fields.len() != 2 || fields[0] != FORMAT_TAG {
        return Err(CodecError::corrupt(1, format!("bad format tag {:?}", header)));
    }
    if fields[1] != VERSION {
        return Err(CodecError::VersionMismatch {
            expected: String::from(VERSION),
            found: String::from(fields[1]),
        });
    }

    //line 2: list name and declared count.
    let props = match next_line(&mut lines, 2)? {
        Some(v) => v,
        None => {
            return Err(CodecError::corrupt(2, "missing list properties"));
        }
    };
    let fields = utils::split_fields(&props);
    if fields.len() != 2 {
        return Err(CodecError::corrupt(2, format!("expected `<name> <count>`, found {:?}", props)));
    }
    let count = ok_or_corrupt!(fields[1].parse::<usize>(), 2, "bad book count");
    let mut list = ok_or_corrupt!(BookList::with_index_buckets(fields[0], index_buckets), 2, "bad list");

    for i in 0..count {
        let lineno = i + 3;
        let line = match next_line(&mut lines, lineno)? {
            Some(v) => v,
            None => {
                return Err(CodecError::corrupt(lineno, format!("declared {} books, found {}", count, i)));
            }
        };
        let fields = utils::split_fields(&line);
        if fields.len() != 4 {
            return Err(CodecError::corrupt(lineno, format!("expected 4 fields, found {}", fields.len())));
        }
        let serial = ok_or_corrupt!(utils::parse_u32(fields[0]), lineno, "bad serial");
        let price = ok_or_corrupt!(utils::parse_u32(fields[2]), lineno, "bad price");
        let quantity = ok_or_corrupt!(utils::parse_u32(fields[3]), lineno, "bad quantity");
        ok_or_corrupt!(list.insert(serial, fields[1], price, quantity), lineno, "rejected book");
    }

    //trailing blank lines are fine, anything else is a count mismatch.
    let mut lineno = count + 3;
    while let Some(line) = next_line(&mut lines, lineno)? {
        if !line.trim().is_empty() {
            return Err(CodecError::corrupt(lineno, format!("declared {} books, found more", count)));
        }
        lineno += 1;
    }

    info!("loaded {} books of list {} from {}", list.len(), list.name(), path.display());
    debug!("list {} indexed over {} buckets", list.name(), list.index_buckets());
    Ok(list)
}

/*
 * Like load, but a missing data file gives back `fresh` instead of
 * an error. The flag is true when `fresh` was used.
 */
pub fn load_or<P: AsRef<Path>>(path: P, index_buckets: usize, fresh: BookList) -> CodecResult<(BookList, bool)> {
    match load(path, index_buckets) {
        Ok(list) => Ok((list, false)),
        Err(CodecError::NotFound) => Ok((fresh, true)),
        Err(e) => Err(e),
    }
}

//bytes that are not UTF-8 make the file corrupt, other read errors are I/O errors.
fn next_line<B: BufRead>(lines: &mut Lines<B>, lineno: usize) -> CodecResult<Option<String>> {
    match lines.next() {
        None => Ok(None),
        Some(Ok(v)) => Ok(Some(v)),
        Some(Err(e)) => match e.kind() {
            ErrorKind::InvalidData => Err(CodecError::corrupt(lineno, "not valid UTF-8")),
            _ => Err(CodecError::Io(e)),
        }
    }
}
