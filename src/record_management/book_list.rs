/**********************************************
  > File Name		: book_list.rs
  > Author		    : lunar
  > Email			: lunar_ubuntu@qq.com
  > Created Time	: Wed Mar 10 07:25:33 PM CST 2021
  > Location        : Shanghai
  > Copyright@ https://github.com/xiaoqixian
 **********************************************/

use std::cmp::Ordering;
use std::collections::VecDeque;
use log::{*};

use super::book::{self, Book, BookUpdate, Direction, SortField};
use crate::errors::{RecordError, RecordResult};
use crate::indexing::SerialIndex;

/*
 * BookList is in charge of inserting, deleting, updating and
 * querying books.
 *
 * Two structures are kept for every list:
 *     1. books: the records themselves. New books are pushed to
 *        the front, the position of a book carries no meaning.
 *     2. index: the serials of all books in the list.
 * Every operation asks the index first, so a duplicate or a
 * missing serial is rejected without walking the records. Then
 * the records are walked and both structures are changed in the
 * same call.
 *
 * n is the number of books the list believes it holds. Before and
 * after every mutation n, the record count and the index size have
 * to agree, otherwise InternalInconsistency is returned. A drift
 * found before the mutation leaves the list untouched.
 */
#[derive(Debug, Clone)]
pub struct BookList {
    pub(super) name: String,
    pub(super) n: usize,
    pub(super) books: VecDeque<Book>,
    pub(super) index: SerialIndex,
}

impl BookList {
    pub fn new(name: &str) -> RecordResult<Self> {
        Self::with_index(name, SerialIndex::new())
    }

    pub fn with_index_buckets(name: &str, num_buckets: usize) -> RecordResult<Self> {
        Self::with_index(name, SerialIndex::with_buckets(num_buckets)?)
    }

    fn with_index(name: &str, index: SerialIndex) -> RecordResult<Self> {
        book::validate_list_name(name)?;
        Ok(BookList {
            name: String::from(name),
            n: 0,
            books: VecDeque::new(),
            index,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: &str) -> RecordResult<()> {
        book::validate_list_name(name)?;
        info!("list {} renamed to {}", self.name, name);
        self.name = String::from(name);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn index_buckets(&self) -> usize {
        self.index.num_buckets()
    }

    pub fn contains(&self, serial: u32) -> bool {
        self.index.contains(serial)
    }

    pub fn insert(&mut self, serial: u32, name: &str, price: u32, quantity: u32) -> RecordResult<()> {
        book::validate_book_name(name)?;
        if self.index.contains(serial) {
            return Err(RecordError::DuplicateKey(serial));
        }
        self.check_count()?;

        self.books.push_front(Book::new(serial, name, price, quantity));
        self.index.add(serial);
        self.n += 1;
        debug!("inserted book {}, {} books in list", serial, self.n);
        self.check_count()
    }

    pub fn delete(&mut self, serial: u32) -> RecordResult<Book> {
        let pos = self.position(serial)?;
        //n is decremented below, it must not have drifted.
        self.check_count()?;
        let removed = match self.books.remove(pos) {
            Some(v) => v,
            None => {
                return Err(self.inconsistency(format!("book {} vanished at position {}", serial, pos)));
            }
        };
        self.index.remove(serial);
        self.n -= 1;
        debug!("deleted book {}, {} books in list", serial, self.n);
        self.check_count()?;
        Ok(removed)
    }

    /*
     * All arguments are checked before the book is touched, so an
     * update either changes every named field or none of them.
     */
    pub fn update(&mut self, serial: u32, update: BookUpdate) -> RecordResult<()> {
        check_arg!(!update.is_empty(), "update of book {} names no field", serial);
        if let Some(name) = &update.name {
            book::validate_book_name(name)?;
        }

        let pos = self.position(serial)?;
        self.check_count()?;
        let book = &mut self.books[pos];
        if let Some(name) = update.name {
            book.name = name;
        }
        if let Some(price) = update.price {
            book.price = price;
        }
        if let Some(quantity) = update.quantity {
            book.quantity = quantity;
        }
        debug!("updated book {}", book);
        self.check_count()
    }

    pub fn query(&self, serial: u32) -> RecordResult<Book> {
        let pos = self.position(serial)?;
        Ok(self.books[pos].clone())
    }

    //returns the quantity left in stock.
    pub fn sell(&mut self, serial: u32, amount: u32) -> RecordResult<u32> {
        check_arg!(amount > 0, "cannot sell 0 copies of book {}", serial);
        let pos = self.position(serial)?;
        self.check_count()?;
        let book = &mut self.books[pos];
        if book.quantity < amount {
            return Err(RecordError::InsufficientStock {
                serial,
                in_stock: book.quantity,
                requested: amount,
            });
        }
        book.quantity -= amount;
        let left = book.quantity;
        debug!("sold {} of book {}, {} left", amount, serial, left);
        self.check_count()?;
        Ok(left)
    }

    pub fn list_all(&self) -> Vec<Book> {
        self.books.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    //equal keys are ordered by ascending serial in both directions.
    pub fn sorted_view(&self, field: SortField, direction: Direction) -> Vec<Book> {
        let mut view = self.list_all();
        view.sort_by(|a, b| {
            let ord = match field {
                SortField::Name => a.name.cmp(&b.name),
                SortField::Price => a.price.cmp(&b.price),
            };
            let ord = match direction {
                Direction::Ascending => ord,
                Direction::Descending => ord.reverse(),
            };
            ord.then_with(|| a.serial.cmp(&b.serial))
        });
        view
    }

    /*
     * Locate a book by serial. The index is asked first, the
     * records are only walked when the index says the book exists.
     * If the walk then fails the two structures disagree.
     */
    fn position(&self, serial: u32) -> RecordResult<usize> {
        if !self.index.contains(serial) {
            return Err(RecordError::KeyNotFound(serial));
        }
        match self.books.iter().position(|b| b.serial == serial) {
            Some(pos) => Ok(pos),
            None => Err(self.inconsistency(format!("serial {} indexed but not in list", serial))),
        }
    }

    fn check_count(&self) -> RecordResult<()> {
        if self.n != self.books.len() || self.index.len() != self.books.len() {
            return Err(self.inconsistency(format!(
                "count {} but {} books and {} index entries",
                self.n,
                self.books.len(),
                self.index.len()
            )));
        }
        Ok(())
    }

    fn inconsistency(&self, msg: String) -> RecordError {
        error!("list {}: {}", self.name, msg);
        RecordError::InternalInconsistency(msg)
    }
}

impl PartialEq for BookList {
    //same name and same books, in any order.
    fn eq(&self, other: &Self) -> bool {
        if self.name != other.name || self.n != other.n {
            return false;
        }
        let by_serial = |a: &Book, b: &Book| -> Ordering { a.serial.cmp(&b.serial) };
        let mut mine = self.list_all();
        let mut theirs = other.list_all();
        mine.sort_by(by_serial);
        theirs.sort_by(by_serial);
        mine == theirs
    }
}
