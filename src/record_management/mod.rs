/**********************************************
  > File Name		: mod.rs
  > Author		    : lunar
  > Email			: lunar_ubuntu@qq.com
  > Created Time     : Wed Mar 10 07:25:33 PM CST 2021
  > Location        : Shanghai
  > Copyright@ https://github.com/xiaoqixian
 **********************************************/

/*
 * The Record Management component provides the book list: an
 * in-memory collection of unordered book records plus a serial
 * index over them.
 *
 * Callers never get a reference into the list. Queries return
 * copies of the books, and all changes go through BookList.
 */

pub mod book;
pub mod book_list;

pub use book::{Book, BookUpdate, Direction, Field, SortField, MAX_BOOKNAME_LEN, MAX_LISTNAME_LEN};
pub use book_list::BookList;
