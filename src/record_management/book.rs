/**********************************************
  > File Name		: book.rs
  > Author		    : lunar
  > Email			: lunar_ubuntu@qq.com
  > Created Time	: Mon 12 Apr 2021 11:01:57 PM CST
  > Location        : Shanghai
  > Copyright@ https://github.com/xiaoqixian
 **********************************************/

use std::fmt;
use crate::errors::RecordResult;
use crate::utils;

pub const MAX_BOOKNAME_LEN: usize = 256;
pub const MAX_LISTNAME_LEN: usize = 256;

/*
 * A book record. The serial is the identity of a book and never
 * changes after insertion, all other fields may be updated.
 *
 * Books handed out by BookList are copies, changing them does not
 * touch the list.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub serial: u32,
    pub name: String,
    pub price: u32, //in minor currency units.
    pub quantity: u32, //copies in stock.
}

impl Book {
    pub fn new(serial: u32, name: &str, price: u32, quantity: u32) -> Self {
        Book {
            serial,
            name: String::from(name),
            price,
            quantity,
        }
    }

    pub fn field(&self, field: Field) -> String {
        match field {
            Field::Name => self.name.clone(),
            Field::Price => self.price.to_string(),
            Field::Quantity => self.quantity.to_string(),
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.serial, self.name, self.price, self.quantity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Price,
    Quantity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Price,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/*
 * The fields to change in one update call. Fields left as None
 * are not touched. At least one field has to be set.
 */
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookUpdate {
    pub name: Option<String>,
    pub price: Option<u32>,
    pub quantity: Option<u32>,
}

impl BookUpdate {
    pub fn name(name: &str) -> Self {
        BookUpdate {
            name: Some(String::from(name)),
            ..Default::default()
        }
    }

    pub fn price(price: u32) -> Self {
        BookUpdate {
            price: Some(price),
            ..Default::default()
        }
    }

    pub fn quantity(quantity: u32) -> Self {
        BookUpdate {
            quantity: Some(quantity),
            ..Default::default()
        }
    }

    pub fn all(name: &str, price: u32, quantity: u32) -> Self {
        BookUpdate {
            name: Some(String::from(name)),
            price: Some(price),
            quantity: Some(quantity),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.quantity.is_none()
    }
}

//book names end up as a single field of a data file line.
pub fn validate_book_name(name: &str) -> RecordResult<()> {
    check_arg!(
        utils::is_token(name, MAX_BOOKNAME_LEN),
        "book name {:?} must be 1..={} bytes without whitespace",
        name,
        MAX_BOOKNAME_LEN
    );
    Ok(())
}

pub fn validate_list_name(name: &str) -> RecordResult<()> {
    check_arg!(
        utils::is_token(name, MAX_LISTNAME_LEN),
        "list name {:?} must be 1..={} bytes without whitespace",
        name,
        MAX_LISTNAME_LEN
    );
    Ok(())
}
