//! Synthetic EDID blocks for integration tests.

#![allow(dead_code)]

pub const HEADER: [u8; 8] = [0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00];

/// 1920x1080 @ 60Hz, 148.5 MHz, 531x299 mm, digital separate sync, +H +V.
pub const FHD_60: [u8; 18] = [
    0x02, 0x3A, 0x80, 0x18, 0x71, 0x38, 0x2D, 0x40, 0x58, 0x2C, 0x45, 0x00, 0x13, 0x2B, 0x21, 0x00,
    0x00, 0x1E,
];

/// Packs three uppercase letters into the big-endian PNP id bytes.
pub fn pack_manufacturer_id(id: &str) -> [u8; 2] {
    let packed = id
        .bytes()
        .fold(0u16, |acc, c| acc << 5 | u16::from(c - 64) & 0b11111);
    packed.to_be_bytes()
}

/// A monitor descriptor slot: `00 00 00 tag 00` plus a 13-byte payload.
pub fn monitor_descriptor(tag: u8, payload: &[u8]) -> [u8; 18] {
    let mut slot = [0u8; 18];
    slot[3] = tag;
    slot[5..5 + payload.len()].copy_from_slice(payload);
    slot
}

/// A text descriptor padded the usual way: line feed, then spaces.
pub fn text_descriptor(tag: u8, text: &str) -> [u8; 18] {
    let mut payload = [0x20u8; 13];
    payload[..text.len()].copy_from_slice(text.as_bytes());
    if text.len() < 13 {
        payload[text.len()] = 0x0A;
    }
    monitor_descriptor(tag, &payload)
}

/// Builds a 128-byte base block field by field.
#[derive(Debug, Clone)]
pub struct EdidBuilder {
    data: [u8; 128],
}

impl EdidBuilder {
    /// A Dell EDID 1.4 block with every timing slot unused.
    pub fn new() -> Self {
        let mut data = [0u8; 128];
        data[..8].copy_from_slice(&HEADER);
        data[0x26..0x36].fill(0x01);
        EdidBuilder { data }
            .manufacturer("DEL")
            .version(1, 4)
    }

    pub fn manufacturer(mut self, id: &str) -> Self {
        self.data[0x08..0x0a].copy_from_slice(&pack_manufacturer_id(id));
        self
    }

    pub fn product_code(mut self, code: u16) -> Self {
        self.data[0x0a..0x0c].copy_from_slice(&code.to_le_bytes());
        self
    }

    pub fn serial_number(mut self, serial: u32) -> Self {
        self.data[0x0c..0x10].copy_from_slice(&serial.to_le_bytes());
        self
    }

    pub fn manufactured(mut self, week: u8, year_byte: u8) -> Self {
        self.data[0x10] = week;
        self.data[0x11] = year_byte;
        self
    }

    pub fn version(mut self, version: u8, revision: u8) -> Self {
        self.data[0x12] = version;
        self.data[0x13] = revision;
        self
    }

    pub fn basic_params(mut self, video_input: u8, h_cm: u8, v_cm: u8, gamma: u8, features: u8) -> Self {
        self.data[0x14..0x19].copy_from_slice(&[video_input, h_cm, v_cm, gamma, features]);
        self
    }

    pub fn colors(mut self, colors: [u8; 10]) -> Self {
        self.data[0x19..0x23].copy_from_slice(&colors);
        self
    }

    pub fn established(mut self, bytes: [u8; 3]) -> Self {
        self.data[0x23..0x26].copy_from_slice(&bytes);
        self
    }

    pub fn standard(mut self, slot: usize, bytes: [u8; 2]) -> Self {
        let offset = 0x26 + slot * 2;
        self.data[offset..offset + 2].copy_from_slice(&bytes);
        self
    }

    pub fn descriptor(mut self, slot: usize, bytes: [u8; 18]) -> Self {
        let offset = 0x36 + slot * 18;
        self.data[offset..offset + 18].copy_from_slice(&bytes);
        self
    }

    pub fn extension_count(mut self, count: u8) -> Self {
        self.data[0x7e] = count;
        self
    }

    /// Returns the block with a correct checksum byte.
    pub fn build(mut self) -> Vec<u8> {
        let sum = self.data[..127].iter().fold(0u8, |acc, b| acc.wrapping_add(*b));
        self.data[127] = sum.wrapping_neg();
        self.data.to_vec()
    }
}

/// A typical 24" monitor: digital 8-bit DisplayPort, 1920x1080 preferred.
pub fn sample_monitor() -> Vec<u8> {
    EdidBuilder::new()
        .product_code(0xA07A)
        .serial_number(0x3035_4B4C)
        .manufactured(5, 20)
        .basic_params(0xA5, 53, 30, 120, 0b0010_1010)
        .colors([0xEE, 0x91, 0xA3, 0x54, 0x4C, 0x99, 0x26, 0x0F, 0x50, 0x54])
        // 720x400@70, 640x480@60, 800x600@60 | 1024x768@60
        .established([0b1010_0001, 0b0000_1000, 0x00])
        .standard(0, [0xD1, 0xC0])
        .standard(1, [0x81, 0x80])
        .standard(2, [0xB3, 0x00])
        .descriptor(0, FHD_60)
        .descriptor(1, text_descriptor(0xFF, "CN0ABC123"))
        .descriptor(
            2,
            monitor_descriptor(0xFD, &[0x38, 0x4C, 0x1E, 0x53, 0x11, 0x00, 0x0A, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20]),
        )
        .descriptor(3, text_descriptor(0xFC, "DELL U2412M"))
        .build()
}
