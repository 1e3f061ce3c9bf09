/**********************************************
  > File Name		: utils.rs
  > Author		    : lunar
  > Email			: lunar_ubuntu@qq.com
  > Created Time	: Thu 11 Mar 2021 03:54:41 PM CST
  > Location        : Shanghai
  > Copyright@ https://github.com/xiaoqixian
 **********************************************/

/*
 * Utils functions for global usage.
 */

//both the data file and the shell are whitespace separated.
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

//a token is something that survives split_fields as a single field.
pub fn is_token(s: &str, max_len: usize) -> bool {
    !s.is_empty() && s.len() <= max_len && !s.chars().any(char::is_whitespace)
}

pub fn parse_u32(s: &str) -> Result<u32, std::num::ParseIntError> {
    s.parse::<u32>()
}
