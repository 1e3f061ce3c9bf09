/**********************************************
  > File Name		: mod.rs
  > Author		    : lunar
  > Email			: lunar_ubuntu@qq.com
  > Created Time	: Fri 14 May 2021 10:34:16 AM CST
  > Location        : Shanghai
  > Copyright@ https://github.com/xiaoqixian
 **********************************************/

/*
 * The interactive shell. It reads one command per line, runs it
 * against the book list and prints one line of result text.
 *
 * Failed commands never end the shell. Only a failure to read
 * input or to write output is returned to the caller.
 */

pub mod command;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use log::{*};

pub use command::Command;
use crate::errors::RecordError;
use crate::persistence::{self, VERSION};
use crate::record_management::{Book, BookList};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell {
    list: BookList,
    data_path: PathBuf,
}

impl Shell {
    pub fn new<P: AsRef<Path>>(list: BookList, data_path: P) -> Self {
        Shell {
            list,
            data_path: data_path.as_ref().to_path_buf(),
        }
    }

    pub fn list(&self) -> &BookList {
        &self.list
    }

    pub fn greet<W: Write>(&self, out: &mut W, fresh: bool) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "Welcome to bookman ({})", VERSION)?;
        writeln!(out)?;
        if fresh {
            writeln!(out, "Saved data not found, starting new list {}", self.list.name())?;
            writeln!(out)?;
        }
        writeln!(out, "Input help for help")?;
        writeln!(out)
    }

    //ends on quit or at the end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        let mut lines = input.lines();
        loop {
            write!(out, "({})> ", self.list.name())?;
            out.flush()?;

            let line = match lines.next() {
                None => {
                    writeln!(out)?;
                    return Ok(());
                },
                Some(v) => v?,
            };

            let cmd = match Command::parse(&line) {
                Ok(Some(v)) => v,
                Ok(None) => continue,
                Err(e) => {
                    debug!("{:?}: {}", line, e);
                    writeln!(out, "Invalid command")?;
                    continue;
                }
            };

            if self.execute(cmd, out)? == Flow::Quit {
                return Ok(());
            }
        }
    }

    pub fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> io::Result<Flow> {
        match cmd {
            Command::Help => {
                writeln!(out, "{}", command::HELP)?;
            },
            Command::Add { serial, name, price, quantity } => {
                let res = self.list.insert(serial, &name, price, quantity);
                report(out, res)?;
            },
            Command::Del { serial } => {
                let res = self.list.delete(serial).map(|_| ());
                report(out, res)?;
            },
            Command::Mod { serial, update } => {
                let res = self.list.update(serial, update);
                report(out, res)?;
            },
            Command::Query { serial, field } => match self.list.query(serial) {
                Ok(book) => match field {
                    Some(f) => writeln!(out, "{}", book.field(f))?,
                    None => print_books(out, &[book])?,
                },
                Err(e) => report(out, Err(e))?,
            },
            Command::QueryAll => {
                print_books(out, &self.list.list_all())?;
            },
            Command::Sort { field, direction } => {
                print_books(out, &self.list.sorted_view(field, direction))?;
            },
            Command::Sell { serial, amount } => match self.list.sell(serial, amount) {
                Ok(left) => writeln!(out, "Success, {} left in stock", left)?,
                Err(e) => report(out, Err(e))?,
            },
            Command::Rename { name } => {
                let res = self.list.rename(&name);
                report(out, res)?;
            },
            Command::Write => match persistence::save(&self.list, &self.data_path) {
                Ok(()) => writeln!(out, "Saved to {}", self.data_path.display())?,
                Err(e) => {
                    warn!("save failed: {}", e);
                    writeln!(out, "Error writing to file: {}", e)?;
                }
            },
            Command::Quit => {
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }
}

fn report<W: Write>(out: &mut W, res: Result<(), RecordError>) -> io::Result<()> {
    let text = match res {
        Ok(()) => "Success",
        Err(RecordError::InvalidArgument(_)) => "Invalid command",
        Err(RecordError::DuplicateKey(_)) => "Book with same SN already exists",
        Err(RecordError::KeyNotFound(_)) => "Book doesn't exist",
        Err(RecordError::InsufficientStock { .. }) => "Not enough books in stock",
        Err(RecordError::InternalInconsistency(_)) => "Internal error",
    };
    writeln!(out, "{}", text)
}

fn print_books<W: Write>(out: &mut W, books: &[Book]) -> io::Result<()> {
    if books.is_empty() {
        return writeln!(out, "No books");
    }
    writeln!(out, "{:<10} {:<24} {:>10} {:>10}", "SN", "NAME", "PRICE", "QUANTITY")?;
    for book in books {
        writeln!(out, "{:<10} {:<24} {:>10} {:>10}", book.serial, book.name, book.price, book.quantity)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests;
