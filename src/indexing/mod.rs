/**********************************************
  > File Name		: mod.rs
  > Author		    : lunar
  > Email			: lunar_ubuntu@qq.com
  > Created Time	: Mon 29 Mar 2021 10:46:17 AM CST
  > Location        : Shanghai
  > Copyright@ https://github.com/xiaoqixian
 **********************************************/

/*
 * The indexing component provides a membership index over the serial
 * numbers of the books held by a book list.
 *
 * The index never stores book data. It only answers whether a serial
 * is present, so the book list can reject duplicate inserts and
 * missing-key operations before it walks its records.
 *
 * A fixed-size table of buckets with chained entries is used, the
 * bucket of a serial is picked by modulo hashing.
 */

pub mod serial_index;

pub use serial_index::SerialIndex;

//a prime, so consecutive serials spread over all buckets.
pub const DEFAULT_NUM_BUCKETS: usize = 10007;
