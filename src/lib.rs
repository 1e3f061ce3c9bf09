/**********************************************
  > File Name		: lib.rs
  > Author		    : lunar
  > Email			: lunar_ubuntu@qq.com
  > Created Time	: Tue 02 Mar 2021 10:31:37 PM CST
  > Location        : Shanghai
  > Copyright@ https://github.com/xiaoqixian
 **********************************************/

/*
 * bookman: a single user inventory ledger for a bookstore.
 *
 * Components:
 *     record_management: the book list, all operations on books.
 *     indexing: the serial index used by the book list.
 *     persistence: save and load a book list as a flat text file.
 *     shell: the interactive command loop.
 */

#[macro_use]
mod macros;

pub mod config;
pub mod errors;
pub mod indexing;
pub mod persistence;
pub mod record_management;
pub mod shell;
pub mod utils;

pub use config::Config;
pub use errors::{CodecError, RecordError};
pub use record_management::{Book, BookList, BookUpdate};
