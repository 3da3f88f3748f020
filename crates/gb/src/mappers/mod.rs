//! Game Boy Memory Bank Controllers (MBCs)
//!
//! This module contains implementations of various Game Boy cartridge mappers
//! that handle ROM/RAM banking and other cartridge hardware features.

mod mbc0;
mod mbc1;
mod mbc2;
mod mbc3;
mod mbc5;

pub use mbc0::Mbc0;
pub use mbc1::Mbc1;
pub use mbc2::Mbc2;
pub use mbc3::Mbc3;
pub use mbc5::Mbc5;

/// Unified mapper enum that dispatches to specific implementations
#[derive(Debug)]
pub enum Mapper {
    Mbc0(Mbc0),
    Mbc1(Mbc1),
    Mbc2(Mbc2),
    Mbc3(Mbc3),
    Mbc5(Mbc5),
}

impl Mapper {
    /// Create a mapper from ROM data and cartridge type
    pub fn from_cart(rom: Vec<u8>, ram: Vec<u8>, cart_type: u8) -> Self {
        match cart_type {
            0x00 => Mapper::Mbc0(Mbc0::new(rom, ram)), // ROM ONLY
            0x01 => Mapper::Mbc1(Mbc1::new(rom, ram)), // MBC1
            0x02 => Mapper::Mbc1(Mbc1::new(rom, ram)), // MBC1+RAM
            0x03 => Mapper::Mbc1(Mbc1::new(rom, ram)), // MBC1+RAM+BATTERY
            0x05 => Mapper::Mbc2(Mbc2::new(rom, ram)), // MBC2
            0x06 => Mapper::Mbc2(Mbc2::new(rom, ram)), // MBC2+BATTERY
            0x0F => Mapper::Mbc3(Mbc3::new(rom, ram)), // MBC3+TIMER+BATTERY
            0x10 => Mapper::Mbc3(Mbc3::new(rom, ram)), // MBC3+TIMER+RAM+BATTERY
            0x11 => Mapper::Mbc3(Mbc3::new(rom, ram)), // MBC3
            0x12 => Mapper::Mbc3(Mbc3::new(rom, ram)), // MBC3+RAM
            0x13 => Mapper::Mbc3(Mbc3::new(rom, ram)), // MBC3+RAM+BATTERY
            0x19 => Mapper::Mbc5(Mbc5::new(rom, ram)), // MBC5
            0x1A => Mapper::Mbc5(Mbc5::new(rom, ram)), // MBC5+RAM
            0x1B => Mapper::Mbc5(Mbc5::new(rom, ram)), // MBC5+RAM+BATTERY
            0x1C => Mapper::Mbc5(Mbc5::new(rom, ram)), // MBC5+RUMBLE
            0x1D => Mapper::Mbc5(Mbc5::new(rom, ram)), // MBC5+RUMBLE+RAM
            0x1E => Mapper::Mbc5(Mbc5::new(rom, ram)), // MBC5+RUMBLE+RAM+BATTERY
            _ => Mapper::Mbc0(Mbc0::new(rom, ram)),    // Default to MBC0
        }
    }

    /// Read from ROM address space
    pub fn read_rom(&self, addr: u16) -> u8 {
        match self {
            Mapper::Mbc0(m) => m.read_rom(addr),
            Mapper::Mbc1(m) => m.read_rom(addr),
            Mapper::Mbc2(m) => m.read_rom(addr),
            Mapper::Mbc3(m) => m.read_rom(addr),
            Mapper::Mbc5(m) => m.read_rom(addr),
        }
    }

    /// Write to ROM address space (for mapper registers)
    pub fn write_rom(&mut self, addr: u16, val: u8) {
        match self {
            Mapper::Mbc0(m) => m.write_rom(addr, val),
            Mapper::Mbc1(m) => m.write_rom(addr, val),
            Mapper::Mbc2(m) => m.write_rom(addr, val),
            Mapper::Mbc3(m) => m.write_rom(addr, val),
            Mapper::Mbc5(m) => m.write_rom(addr, val),
        }
    }

    /// Read from RAM address space
    pub fn read_ram(&self, addr: u16) -> u8 {
        match self {
            Mapper::Mbc0(m) => m.read_ram(addr),
            Mapper::Mbc1(m) => m.read_ram(addr),
            Mapper::Mbc2(m) => m.read_ram(addr),
            Mapper::Mbc3(m) => m.read_ram(addr),
            Mapper::Mbc5(m) => m.read_ram(addr),
        }
    }

    /// Write to RAM address space
    pub fn write_ram(&mut self, addr: u16, val: u8) {
        match self {
            Mapper::Mbc0(m) => m.write_ram(addr, val),
            Mapper::Mbc1(m) => m.write_ram(addr, val),
            Mapper::Mbc2(m) => m.write_ram(addr, val),
            Mapper::Mbc3(m) => m.write_ram(addr, val),
            Mapper::Mbc5(m) => m.write_ram(addr, val),
        }
    }

    /// Advance any on-cartridge real-time clock by `cycles` CPU cycles.
    /// A no-op for mappers without one.
    pub fn tick(&mut self, cycles: u32) {
        if let Mapper::Mbc3(m) = self {
            m.tick(cycles);
        }
    }

    /// Raw contents of the cartridge's battery-backed RAM, for sidecar persistence.
    pub fn battery_ram(&self) -> &[u8] {
        match self {
            Mapper::Mbc0(m) => m.ram(),
            Mapper::Mbc1(m) => m.ram(),
            Mapper::Mbc2(m) => m.ram(),
            Mapper::Mbc3(m) => m.ram(),
            Mapper::Mbc5(m) => m.ram(),
        }
    }

    /// Restore battery-backed RAM from a previously saved sidecar file.
    /// Shorter or longer buffers than the cartridge's declared RAM size are
    /// tolerated; only the overlapping prefix is copied.
    pub fn load_battery_ram(&mut self, data: &[u8]) {
        match self {
            Mapper::Mbc0(m) => m.load_ram(data),
            Mapper::Mbc1(m) => m.load_ram(data),
            Mapper::Mbc2(m) => m.load_ram(data),
            Mapper::Mbc3(m) => m.load_ram(data),
            Mapper::Mbc5(m) => m.load_ram(data),
        }
    }

    /// MBC3's 48-byte RTC block for the trailing section of a sidecar save
    /// file. `None` for mappers without a clock.
    pub fn rtc_bytes(&self) -> Option<[u8; 48]> {
        match self {
            Mapper::Mbc3(m) => Some(m.rtc_bytes()),
            _ => None,
        }
    }

    pub fn load_rtc_bytes(&mut self, data: &[u8]) {
        if let Mapper::Mbc3(m) = self {
            m.load_rtc_bytes(data);
        }
    }

    /// Get the cartridge type name
    #[cfg(test)]
    pub fn name(&self) -> &str {
        match self {
            Mapper::Mbc0(_) => "MBC0",
            Mapper::Mbc1(_) => "MBC1",
            Mapper::Mbc2(_) => "MBC2",
            Mapper::Mbc3(_) => "MBC3",
            Mapper::Mbc5(_) => "MBC5",
        }
    }
}
