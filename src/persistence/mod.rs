/**********************************************
  > File Name		: mod.rs
  > Author		    : lunar
  > Email			: lunar_ubuntu@qq.com
  > Created Time	: Fri 02 Apr 2021 11:28:19 AM CST
  > Location        : Shanghai
  > Copyright@ https://github.com/xiaoqixian
 **********************************************/

/*
 * The persistence component saves a book list to a flat text file
 * and loads it back.
 *
 * Data file layout, whitespace separated:
 *     bookman <version>
 *     <list name> <count>
 *     <serial> <name> <price> <quantity>    (count lines)
 *
 * The version must match VERSION exactly. A list is rebuilt by
 * inserting every book line into a fresh BookList, so everything
 * BookList rejects (duplicate serials, bad names) makes the file
 * corrupt.
 */

pub mod data_file;

pub use data_file::{load, load_or, save};

pub const FORMAT_TAG: &str = "bookman";
pub const VERSION: &str = "0.0.1";
pub const DEFAULT_DATA_PATH: &str = "books.dat";
