/**********************************************
  > File Name		: config.rs
  > Author		    : lunar
  > Email			: lunar_ubuntu@qq.com
  > Created Time	: Fri 02 Apr 2021 11:28:19 AM CST
  > Location        : Shanghai
  > Copyright@ https://github.com/xiaoqixian
 **********************************************/

/*
 * Settings of one bookman session. Every flag can also be given
 * through an environment variable, flags win over the environment.
 */

use std::path::PathBuf;
use clap::Parser;

use crate::indexing::DEFAULT_NUM_BUCKETS;
use crate::persistence::{DEFAULT_DATA_PATH, VERSION};
use crate::record_management::BookList;
use crate::errors::RecordResult;

pub const DEFAULT_LIST_NAME: &str = "NewList";

#[derive(Debug, Clone, Parser)]
#[command(name = "bookman", version = VERSION, about = "Bookstore inventory ledger")]
pub struct Config {
    /// Data file to load at startup and to write on `write`.
    #[arg(long, short = 'd', env = "BOOKMAN_DATA", default_value = DEFAULT_DATA_PATH)]
    pub data_path: PathBuf,

    /// Name of the list created when the data file does not exist.
    #[arg(long, env = "BOOKMAN_LIST_NAME", default_value = DEFAULT_LIST_NAME)]
    pub default_list_name: String,

    /// Number of buckets of the serial index.
    #[arg(
        long,
        env = "BOOKMAN_INDEX_BUCKETS",
        default_value_t = DEFAULT_NUM_BUCKETS,
        value_parser = parse_buckets
    )]
    pub index_buckets: usize,
}

fn parse_buckets(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err(String::from("the index needs at least one bucket")),
        Ok(v) => Ok(v),
        Err(e) => Err(e.to_string()),
    }
}

impl Config {
    //the list to start with when there is no data file yet.
    pub fn fresh_list(&self) -> RecordResult<BookList> {
        BookList::with_index_buckets(&self.default_list_name, self.index_buckets)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            default_list_name: String::from(DEFAULT_LIST_NAME),
            index_buckets: DEFAULT_NUM_BUCKETS,
        }
    }
}
