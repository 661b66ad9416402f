//! Big-endian byte buffer helpers
//!
//! All buffers are network byte order: the first byte carries the most
//! significant bits. Bit indices count from 0 at the least significant bit of
//! the whole buffer up to `len * 8 - 1` at the most significant.

///Sets the `bits` leading bits to one, the rest stays untouched
pub(crate) fn set_leading_bits(buf: &mut [u8], bits: u8) {
    let mut remaining = bits;
    let mut idx = 0;
    while remaining >= 8 {
        buf[idx] = 0xff;
        idx += 1;
        remaining -= 8;
    }
    if remaining != 0 {
        buf[idx] |= 0xff << (8 - remaining);
    }
}

///Sets the bit at `index` (0 = least significant bit of the buffer)
pub(crate) fn set_bit(buf: &mut [u8], index: u8) {
    let byte = buf.len() - 1 - (index / 8) as usize;
    buf[byte] |= 1 << (index % 8);
}

///Flips every bit
pub(crate) fn invert(buf: &mut [u8]) {
    for byte in buf.iter_mut() {
        *byte ^= 0xff;
    }
}

///Bitwise AND of `rhs` into `dst`
pub(crate) fn and_assign(dst: &mut [u8], rhs: &[u8]) {
    for (dst, rhs) in dst.iter_mut().zip(rhs.iter()) {
        *dst &= *rhs;
    }
}

///Bitwise OR of `rhs` into `dst`
pub(crate) fn or_assign(dst: &mut [u8], rhs: &[u8]) {
    for (dst, rhs) in dst.iter_mut().zip(rhs.iter()) {
        *dst |= *rhs;
    }
}

///Fixed-width addition of `addend` into `dst`, carry out of the most
///significant byte is discarded
pub(crate) fn wrapping_add_assign(dst: &mut [u8], addend: &[u8]) {
    let mut carry = 0u16;
    for idx in (0..dst.len()).rev() {
        let sum = dst[idx] as u16 + addend[idx] as u16 + carry;
        dst[idx] = sum as u8;
        carry = sum >> 8;
    }
}

///Index of the lowest set bit, `None` when every bit is zero
pub(crate) fn lowest_set_bit(buf: &[u8]) -> Option<u8> {
    for (idx, byte) in buf.iter().enumerate().rev() {
        if *byte != 0 {
            let offset = (buf.len() - 1 - idx) as u8 * 8;
            return Some(offset + byte.trailing_zeros() as u8);
        }
    }
    None
}

///Index of the highest set bit, `None` when every bit is zero
pub(crate) fn highest_set_bit(buf: &[u8]) -> Option<u8> {
    for (idx, byte) in buf.iter().enumerate() {
        if *byte != 0 {
            let offset = (buf.len() - 1 - idx) as u8 * 8;
            return Some(offset + 7 - byte.leading_zeros() as u8);
        }
    }
    None
}
