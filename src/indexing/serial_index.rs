/**********************************************
  > File Name		: serial_index.rs
  > Author		    : lunar
  > Email			: lunar_ubuntu@qq.com
  > Created Time	: Tue Apr  6 10:24:27 2021
  > Location        : Shanghai
  > Copyright@ https://github.com/xiaoqixian
 **********************************************/

use log::{*};
use crate::errors::{RecordError, RecordResult};

/*
 * Bucket table layout:
 *     buckets[hash(serial)] -> chain of serials.
 *
 * add and remove are both idempotent: adding a present serial
 * and removing an absent one are no-ops, not errors.
 * num_entries is kept alongside the chains so len() does not
 * walk the table.
 */
#[derive(Debug, Clone)]
pub struct SerialIndex {
    buckets: Vec<Vec<u32>>,
    num_entries: usize,
}

impl SerialIndex {
    pub fn new() -> Self {
        SerialIndex {
            buckets: vec![Vec::new(); super::DEFAULT_NUM_BUCKETS],
            num_entries: 0,
        }
    }

    pub fn with_buckets(num_buckets: usize) -> RecordResult<Self> {
        if num_buckets == 0 {
            return Err(RecordError::InvalidArgument(String::from("index needs at least one bucket")));
        }
        debug!("serial index created with {} buckets", num_buckets);
        Ok(SerialIndex {
            buckets: vec![Vec::new(); num_buckets],
            num_entries: 0,
        })
    }

    fn hash(&self, serial: u32) -> usize {
        (serial as usize) % self.buckets.len()
    }

    pub fn contains(&self, serial: u32) -> bool {
        self.buckets[self.hash(serial)].contains(&serial)
    }

    pub fn add(&mut self, serial: u32) {
        let key = self.hash(serial);
        let chain = &mut self.buckets[key];
        if chain.contains(&serial) {
            return;
        }
        chain.push(serial);
        self.num_entries += 1;
    }

    pub fn remove(&mut self, serial: u32) {
        let key = self.hash(serial);
        let chain = &mut self.buckets[key];
        if let Some(pos) = chain.iter().position(|&s| s == serial) {
            //order inside a chain means nothing.
            chain.swap_remove(pos);
            self.num_entries -= 1;
        }
    }

    pub fn len(&self) -> usize {
        self.num_entries
    }

    pub fn is_empty(&self) -> bool {
        self.num_entries == 0
    }

    pub fn num_buckets(&self) -> usize {
        self.buckets.len()
    }
}

impl Default for SerialIndex {
    fn default() -> Self {
        Self::new()
    }
}
