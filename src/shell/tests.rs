/**********************************************
  > File Name		: shell/tests.rs
  > Author		    : lunar
  > Email			: lunar_ubuntu@qq.com
  > Created Time	: Fri 14 May 2021 10:34:16 AM CST
  > Location        : Shanghai
  > Copyright@ https://github.com/xiaoqixian
 **********************************************/

use std::io::Cursor;
use tempfile::TempDir;

use super::*;
use crate::errors::ParseError;
use crate::indexing::DEFAULT_NUM_BUCKETS;
use crate::record_management::{BookUpdate, Direction, Field, SortField};

fn init() -> (TempDir, Shell) {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = TempDir::new().expect("create temp dir failed");
    let path = dir.path().join("books.dat");
    let list = BookList::new("Shelf").unwrap();
    (dir, Shell::new(list, path))
}

fn run(shell: &mut Shell, input: &str) -> String {
    let mut out = Vec::new();
    shell.run(Cursor::new(input), &mut out).expect("shell run failed");
    String::from_utf8(out).unwrap()
}

#[test]
fn command_parse() {
    assert_eq!(Command::parse("   ").unwrap(), None);
    assert_eq!(
        Command::parse("add 1 Dune 300 4").unwrap(),
        Some(Command::Add { serial: 1, name: String::from("Dune"), price: 300, quantity: 4 })
    );
    assert_eq!(
        Command::parse("mod price 1 350").unwrap(),
        Some(Command::Mod { serial: 1, update: BookUpdate::price(350) })
    );
    assert_eq!(
        Command::parse("modall 1 Dune2 1 2").unwrap(),
        Some(Command::Mod { serial: 1, update: BookUpdate::all("Dune2", 1, 2) })
    );
    assert_eq!(
        Command::parse("query all 3").unwrap(),
        Some(Command::Query { serial: 3, field: None })
    );
    assert_eq!(
        Command::parse("query quantity 3").unwrap(),
        Some(Command::Query { serial: 3, field: Some(Field::Quantity) })
    );
    assert_eq!(
        Command::parse("sort price d").unwrap(),
        Some(Command::Sort { field: SortField::Price, direction: Direction::Descending })
    );
    assert_eq!(Command::parse("sell 2 1").unwrap(), Some(Command::Sell { serial: 2, amount: 1 }));
    assert_eq!(Command::parse("quit").unwrap(), Some(Command::Quit));
}

#[test]
fn command_parse_errors() {
    assert_eq!(Command::parse("fly"), Err(ParseError::UnknownCommand(String::from("fly"))));
    assert_eq!(
        Command::parse("del"),
        Err(ParseError::WrongArity { command: String::from("del"), expected: 1, found: 0 })
    );
    assert!(matches!(Command::parse("add -1 Dune 300 4"), Err(ParseError::BadValue { what: "serial", .. })));
    assert!(matches!(Command::parse("mod color 1 red"), Err(ParseError::BadValue { what: "field", .. })));
    assert!(matches!(Command::parse("sort price up"), Err(ParseError::BadValue { .. })));
    assert!(matches!(Command::parse("queryall now"), Err(ParseError::WrongArity { .. })));
}

#[test]
fn shell_session() {
    let (_dir, mut shell) = init();
    let out = run(
        &mut shell,
        "add 1 Dune 300 4\nadd 1 Emma 100 2\nadd 2 Emma 100 2\nquery name 2\ndel 9\nsell 1 5\nsell 1 3\nquery quantity 1\n",
    );
    let replies: Vec<&str> = out.split("(Shelf)> ").map(str::trim).filter(|s| !s.is_empty()).collect();
    assert_eq!(
        replies,
        vec![
            "Success",
            "Book with same SN already exists",
            "Success",
            "Emma",
            "Book doesn't exist",
            "Not enough books in stock",
            "Success, 1 left in stock",
            "1",
        ]
    );
    assert_eq!(shell.list().len(), 2);
}

#[test]
fn shell_invalid_input_keeps_running() {
    let (_dir, mut shell) = init();
    let out = run(&mut shell, "bogus\nadd 1 Dune x 4\n\nadd 1 Dune 3 4\n");
    assert_eq!(out.matches("Invalid command").count(), 2);
    assert!(out.contains("Success"));
    assert!(shell.list().contains(1));
}

#[test]
fn shell_quit_stops_reading() {
    let (_dir, mut shell) = init();
    run(&mut shell, "add 1 Dune 300 4\nquit\nadd 2 Emma 100 2\n");
    assert!(shell.list().contains(1));
    assert!(!shell.list().contains(2));
}

#[test]
fn shell_sort_and_listing() {
    let (_dir, mut shell) = init();
    let out = run(&mut shell, "queryall\nadd 1 Dune 300 4\nadd 2 Emma 100 2\nadd 3 Ulysses 200 7\nsort price a\n");
    assert!(out.contains("No books"));
    let dune = out.rfind("Dune").unwrap();
    let emma = out.rfind("Emma").unwrap();
    let ulysses = out.rfind("Ulysses").unwrap();
    assert!(emma < ulysses && ulysses < dune);
}

#[test]
fn shell_write_saves_list() {
    let (dir, mut shell) = init();
    let out = run(&mut shell, "add 1 Dune 300 4\nrename Attic\nwrite\n");
    assert!(out.contains("Saved to"));
    assert!(out.contains("(Attic)> "));

    let loaded = persistence::load(dir.path().join("books.dat"), DEFAULT_NUM_BUCKETS).unwrap();
    assert_eq!(loaded.name(), "Attic");
    assert_eq!(loaded.query(1).unwrap().price, 300);
}

#[test]
fn shell_write_failure_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("books.dat");
    let mut shell = Shell::new(BookList::new("Shelf").unwrap(), &path);
    let out = run(&mut shell, "write\n");
    assert!(out.contains("Error writing to file"));
}

#[test]
fn shell_greeting() {
    let (_dir, shell) = init();
    let mut out = Vec::new();
    shell.greet(&mut out, true).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains(VERSION));
    assert!(text.contains("starting new list Shelf"));
}
