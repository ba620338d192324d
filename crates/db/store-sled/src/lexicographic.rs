//! Order-preserving key encoding for composite sled keys.

use anyhow::anyhow;
use proofreg_primitives::ProductId;

/// Trait for types that can be encoded and decoded lexicographically.
pub(crate) trait LexicographicKey: Sized {
    fn encode_lexicographic(&self, out: &mut Vec<u8>);
    fn decode_lexicographic(data: &mut &[u8]) -> anyhow::Result<Self>;
}

/// Encode a lexicographic key into bytes.
pub(crate) fn encode_key<T: LexicographicKey>(value: &T) -> Vec<u8> {
    let mut out = Vec::new();
    value.encode_lexicographic(&mut out);
    out
}

/// Decode a lexicographic key from bytes.
pub(crate) fn decode_key<T: LexicographicKey>(data: &[u8]) -> anyhow::Result<T> {
    let mut remaining = data;
    let value = T::decode_lexicographic(&mut remaining)?;
    if !remaining.is_empty() {
        return Err(anyhow!("lexicographic key has trailing bytes"));
    }
    Ok(value)
}

fn read_u64(data: &mut &[u8]) -> anyhow::Result<u64> {
    if data.len() < 8 {
        return Err(anyhow!(
            "lexicographic key underflow: need 8 bytes, got {}",
            data.len()
        ));
    }
    let (prefix, rest) = data.split_at(8);
    *data = rest;
    let mut out = [0u8; 8];
    out.copy_from_slice(prefix);
    Ok(u64::from_be_bytes(out))
}

impl LexicographicKey for u64 {
    fn encode_lexicographic(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_be_bytes());
    }

    fn decode_lexicographic(data: &mut &[u8]) -> anyhow::Result<Self> {
        read_u64(data)
    }
}

impl LexicographicKey for ProductId {
    fn encode_lexicographic(&self, out: &mut Vec<u8>) {
        self.as_u64().encode_lexicographic(out);
    }

    fn decode_lexicographic(data: &mut &[u8]) -> anyhow::Result<Self> {
        read_u64(data).map(ProductId::new)
    }
}

impl<A, B> LexicographicKey for (A, B)
where
    A: LexicographicKey,
    B: LexicographicKey,
{
    fn encode_lexicographic(&self, out: &mut Vec<u8>) {
        self.0.encode_lexicographic(out);
        self.1.encode_lexicographic(out);
    }

    fn decode_lexicographic(data: &mut &[u8]) -> anyhow::Result<Self> {
        let first = A::decode_lexicographic(data)?;
        let second = B::decode_lexicographic(data)?;
        Ok((first, second))
    }
}
