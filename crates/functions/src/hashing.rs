//! Cryptographic digest functions producing lowercase-hex strings.

use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};
use skiffsql_core::error::{Error, Result};
use skiffsql_core::types::Value;

fn digest_value(value: &Value, hash_fn: impl Fn(&[u8]) -> Vec<u8>) -> Result<Value> {
    if value.is_null() {
        return Ok(Value::null());
    }
    if let Some(s) = value.as_str() {
        return Ok(Value::string(hex::encode(hash_fn(s.as_bytes()))));
    }
    if let Some(b) = value.as_bytes() {
        return Ok(Value::string(hex::encode(hash_fn(b))));
    }
    Err(Error::type_mismatch_value("STRING or BYTES", value))
}

pub fn eval_md5(value: &Value) -> Result<Value> {
    digest_value(value, |bytes| md5::compute(bytes).to_vec())
}

pub fn eval_sha1(value: &Value) -> Result<Value> {
    digest_value(value, |bytes| {
        let mut hasher = Sha1::new();
        hasher.update(bytes);
        hasher.finalize().to_vec()
    })
}

pub fn eval_sha256(value: &Value) -> Result<Value> {
    digest_value(value, |bytes| {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        hasher.finalize().to_vec()
    })
}

pub fn eval_sha512(value: &Value) -> Result<Value> {
    digest_value(value, |bytes| {
        let mut hasher = Sha512::new();
        hasher.update(bytes);
        hasher.finalize().to_vec()
    })
}
