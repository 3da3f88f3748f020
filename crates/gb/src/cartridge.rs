//! Cartridge header parsing and mapper construction.

use crate::mappers::Mapper;

#[derive(thiserror::Error, Debug)]
pub enum CartridgeError {
    #[error("ROM image too small to contain a header ({0} bytes)")]
    TooSmall(usize),
}

/// Color Game Boy support declared by the $0143 header byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CgbSupport {
    DmgOnly,
    CgbCompatible,
    CgbOnly,
}

pub struct Cartridge {
    pub mapper: Mapper,
    pub title: String,
    pub cgb_support: CgbSupport,
    pub rom_size_declared: usize,
    pub has_battery: bool,
}

/// Whether `$0147` names a battery-backed variant of its MBC family.
fn cart_type_has_battery(cart_type: u8) -> bool {
    matches!(
        cart_type,
        0x03 | 0x06 | 0x09 | 0x0D | 0x0F | 0x10 | 0x13 | 0x1B | 0x1E | 0x22 | 0xFF
    )
}

fn rom_banks_for_code(code: u8) -> usize {
    match code {
        0x00..=0x08 => 2usize << code,
        _ => 2,
    }
}

fn ram_bytes_for_code(code: u8) -> usize {
    match code {
        0x00 => 0,
        0x01 => 0, // officially unused, some homebrew uses 2 KiB; treated as none
        0x02 => 8 * 1024,
        0x03 => 32 * 1024,
        0x04 => 128 * 1024,
        0x05 => 64 * 1024,
        _ => 0,
    }
}

impl Cartridge {
    /// Parse a cartridge image and build the matching mapper.
    ///
    /// The ROM is truncated or zero-padded to the header-declared size
    /// (`rom_banks_for_code(data[0x0148]) * 16 KiB`) rather than rejected: a
    /// dumped ROM that's short a few trailing banks, or padded with extra
    /// trailing bytes, still boots.
    pub fn load(data: &[u8]) -> Result<Self, CartridgeError> {
        if data.len() < 0x0150 {
            return Err(CartridgeError::TooSmall(data.len()));
        }

        let cart_type = data[0x0147];
        let declared_rom = rom_banks_for_code(data[0x0148]) * 0x4000;
        let ram_size = ram_bytes_for_code(data[0x0149]);

        let mut rom = data.to_vec();
        rom.resize(declared_rom, 0xFF);

        let cgb_byte = data[0x0143];
        let cgb_support = match cgb_byte {
            0xC0 => CgbSupport::CgbOnly,
            0x80 => CgbSupport::CgbCompatible,
            _ => CgbSupport::DmgOnly,
        };

        let title_bytes = &data[0x0134..0x0144];
        let title = title_bytes
            .iter()
            .take_while(|&&b| b != 0)
            .map(|&b| b as char)
            .collect::<String>();

        let ram = if ram_size > 0 { vec![0u8; ram_size] } else { Vec::new() };
        let mapper = Mapper::from_cart(rom, ram, cart_type);

        Ok(Self {
            mapper,
            title,
            cgb_support,
            rom_size_declared: declared_rom,
            has_battery: cart_type_has_battery(cart_type),
        })
    }

    /// Battery-backed RAM plus, for MBC3, a trailing 48-byte RTC block —
    /// the payload written to a `<rom>.sav` sidecar file.
    pub fn battery_save_data(&self) -> Vec<u8> {
        let mut out = self.mapper.battery_ram().to_vec();
        if let Some(rtc) = self.mapper.rtc_bytes() {
            out.extend_from_slice(&rtc);
        }
        out
    }

    /// Restore battery RAM (and, for MBC3, the trailing 48-byte RTC block)
    /// from a previously saved sidecar file's contents.
    pub fn load_battery_save_data(&mut self, data: &[u8]) {
        let ram_len = self.mapper.battery_ram().len();
        self.mapper.load_battery_ram(&data[..ram_len.min(data.len())]);
        if ram_len < data.len() {
            self.mapper.load_rtc_bytes(&data[ram_len..]);
        }
    }
}
