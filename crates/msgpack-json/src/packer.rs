//! `MsgPackPacker` — MessagePack wire-level write primitives.

use msgpack_json_buffers::Writer;

/// Writes MessagePack-framed scalars and container headers into an
/// in-memory [`Writer`]. The packer knows nothing about value trees; the
/// codec drives it one marker at a time.
pub struct MsgPackPacker {
    pub writer: Writer,
}

impl Default for MsgPackPacker {
    fn default() -> Self {
        Self::new()
    }
}

impl MsgPackPacker {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    /// Returns the bytes written since the last flush.
    pub fn flush(&mut self) -> Vec<u8> {
        self.writer.flush()
    }

    pub fn write_nil(&mut self) {
        self.writer.u8(0xc0);
    }

    pub fn write_bool(&mut self, value: bool) {
        self.writer.u8(if value { 0xc3 } else { 0xc2 });
    }

    /// Writes a non-negative value in its most compact form.
    fn u32_int(&mut self, num: u32) {
        let writer = &mut self.writer;
        writer.ensure_capacity(5);
        if num <= 0x7f {
            writer.uint8[writer.x] = num as u8;
            writer.x += 1;
        } else if num <= 0xffff {
            writer.uint8[writer.x] = 0xcd;
            writer.x += 1;
            writer.u16(num as u16);
        } else {
            writer.uint8[writer.x] = 0xce;
            writer.x += 1;
            writer.u32(num);
        }
    }

    /// Writes a negative value in its most compact form.
    fn n32_int(&mut self, num: i32) {
        let writer = &mut self.writer;
        writer.ensure_capacity(5);
        if num >= -0x20 {
            // negative fixint: 0xe0..0xff
            writer.uint8[writer.x] = (0x100i32 + num) as u8;
            writer.x += 1;
        } else if num >= -0x8000 {
            writer.uint8[writer.x] = 0xd1;
            writer.x += 1;
            writer.u16(num as u16);
        } else {
            writer.uint8[writer.x] = 0xd2;
            writer.x += 1;
            writer.i32(num);
        }
    }

    /// Writes a signed 32-bit integer in its most compact encoding.
    pub fn write_i32(&mut self, value: i32) {
        if value >= 0 {
            self.u32_int(value as u32);
        } else {
            self.n32_int(value);
        }
    }

    /// Writes a full-width signed 64-bit integer (0xd3).
    pub fn write_i64(&mut self, value: i64) {
        self.writer.u8u64(0xd3, value as u64);
    }

    /// Writes a full-width unsigned 64-bit integer (0xcf).
    pub fn write_u64(&mut self, value: u64) {
        self.writer.u8u64(0xcf, value);
    }

    /// Writes a 64-bit float (0xcb).
    pub fn write_f64(&mut self, value: f64) {
        self.writer.u8f64(0xcb, value);
    }

    pub fn write_str_header(&mut self, length: usize) {
        if length <= 0x1f {
            self.writer.u8(0xa0 | length as u8);
        } else if length <= 0xff {
            self.writer.u16(0xd900 | length as u16);
        } else if length <= 0xffff {
            self.writer.u8u16(0xda, length as u16);
        } else {
            self.writer.u8u32(0xdb, length as u32);
        }
    }

    pub fn write_str(&mut self, s: &str) {
        self.write_str_header(s.len());
        self.writer.utf8(s);
    }

    pub fn write_bin_header(&mut self, length: usize) {
        if length <= 0xff {
            self.writer.u16(0xc400 | length as u16);
        } else if length <= 0xffff {
            self.writer.u8u16(0xc5, length as u16);
        } else {
            self.writer.u8u32(0xc6, length as u32);
        }
    }

    pub fn write_bin(&mut self, buf: &[u8]) {
        self.write_bin_header(buf.len());
        self.writer.buf(buf);
    }

    pub fn write_array_header(&mut self, length: usize) {
        if length <= 0xf {
            self.writer.u8(0x90 | length as u8);
        } else if length <= 0xffff {
            self.writer.u8u16(0xdc, length as u16);
        } else {
            self.writer.u8u32(0xdd, length as u32);
        }
    }

    pub fn write_map_header(&mut self, length: usize) {
        if length <= 0xf {
            self.writer.u8(0x80 | length as u8);
        } else if length <= 0xffff {
            self.writer.u8u16(0xde, length as u16);
        } else {
            self.writer.u8u32(0xdf, length as u32);
        }
    }
}
