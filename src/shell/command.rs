/**********************************************
  > File Name		: command.rs
  > Author		    : lunar
  > Email			: lunar_ubuntu@qq.com
  > Created Time	: Fri 14 May 2021 10:34:16 AM CST
  > Location        : Shanghai
  > Copyright@ https://github.com/xiaoqixian
 **********************************************/

use crate::errors::ParseError;
use crate::record_management::{BookUpdate, Direction, Field, SortField};
use crate::utils;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Add {
        serial: u32,
        name: String,
        price: u32,
        quantity: u32,
    },
    Del {
        serial: u32,
    },
    //covers both `mod` and `modall`.
    Mod {
        serial: u32,
        update: BookUpdate,
    },
    //field None means all fields.
    Query {
        serial: u32,
        field: Option<Field>,
    },
    QueryAll,
    Sort {
        field: SortField,
        direction: Direction,
    },
    Sell {
        serial: u32,
        amount: u32,
    },
    Rename {
        name: String,
    },
    Write,
    Quit,
}

impl Command {
    /*
     * Turn one input line into a command. A blank line gives
     * Ok(None). Names are taken as they are, BookList checks them.
     */
    pub fn parse(line: &str) -> Result<Option<Command>, ParseError> {
        let tokens = utils::split_fields(line);
        let (name, args) = match tokens.split_first() {
            None => return Ok(None),
            Some(v) => v,
        };

        let cmd = match *name {
            "help" => {
                arity(name, args, 0)?;
                Command::Help
            },
            "add" => {
                arity(name, args, 4)?;
                Command::Add {
                    serial: number("serial", args[0])?,
                    name: String::from(args[1]),
                    price: number("price", args[2])?,
                    quantity: number("quantity", args[3])?,
                }
            },
            "del" => {
                arity(name, args, 1)?;
                Command::Del {
                    serial: number("serial", args[0])?,
                }
            },
            "mod" => {
                arity(name, args, 3)?;
                let serial = number("serial", args[1])?;
                let update = match args[0] {
                    "name" => BookUpdate::name(args[2]),
                    "price" => BookUpdate::price(number("price", args[2])?),
                    "quantity" => BookUpdate::quantity(number("quantity", args[2])?),
                    other => return Err(bad("field", other)),
                };
                Command::Mod { serial, update }
            },
            "modall" => {
                arity(name, args, 4)?;
                Command::Mod {
                    serial: number("serial", args[0])?,
                    update: BookUpdate::all(args[1], number("price", args[2])?, number("quantity", args[3])?),
                }
            },
            "query" => {
                arity(name, args, 2)?;
                let field = match args[0] {
                    "all" => None,
                    "name" => Some(Field::Name),
                    "price" => Some(Field::Price),
                    "quantity" => Some(Field::Quantity),
                    other => return Err(bad("field", other)),
                };
                Command::Query {
                    serial: number("serial", args[1])?,
                    field,
                }
            },
            "queryall" => {
                arity(name, args, 0)?;
                Command::QueryAll
            },
            "sort" => {
                arity(name, args, 2)?;
                let field = match args[0] {
                    "name" => SortField::Name,
                    "price" => SortField::Price,
                    other => return Err(bad("sort field", other)),
                };
                let direction = match args[1] {
                    "a" => Direction::Ascending,
                    "d" => Direction::Descending,
                    other => return Err(bad("sort direction", other)),
                };
                Command::Sort { field, direction }
            },
            "sell" => {
                arity(name, args, 2)?;
                Command::Sell {
                    serial: number("serial", args[0])?,
                    amount: number("quantity", args[1])?,
                }
            },
            "rename" => {
                arity(name, args, 1)?;
                Command::Rename {
                    name: String::from(args[0]),
                }
            },
            "write" => {
                arity(name, args, 0)?;
                Command::Write
            },
            "quit" => {
                arity(name, args, 0)?;
                Command::Quit
            },
            other => {
                return Err(ParseError::UnknownCommand(String::from(other)));
            }
        };
        Ok(Some(cmd))
    }
}

fn arity(command: &str, args: &[&str], expected: usize) -> Result<(), ParseError> {
    if args.len() != expected {
        return Err(ParseError::WrongArity {
            command: String::from(command),
            expected,
            found: args.len(),
        });
    }
    Ok(())
}

fn number(what: &'static str, value: &str) -> Result<u32, ParseError> {
    utils::parse_u32(value).map_err(|_| bad(what, value))
}

fn bad(what: &'static str, value: &str) -> ParseError {
    ParseError::BadValue {
        what,
        value: String::from(value),
    }
}

pub const HELP: &str = "
Help:

  Modification
   add [SN] [NAME] [PRICE] [QUANTITY]        add a new entry
   del [SN]                                  delete an entry
   mod [name|price|quantity] [SN] [VALUE]    modify specified property of an entry
   modall [SN] [NAME] [PRICE] [QUANTITY]     modify all properties of an entry
   rename [NAME]                             rename the list

  Query
   query [name|price|quantity] [SN]          query specified property of an entry
   query all [SN]                            query all properties of an entry
   queryall                                  query all properties of all entries
   sort [name|price] [a|d]                   sort entries by name|price in ascending|descending order

  Transaction
   sell [SN] [QUANTITY]                      sell specified quantity of specified entry

  Save & Exit
   write                                     save modified data to file
   quit                                      exit without saving

  Misc
   help                                      print help message
";
