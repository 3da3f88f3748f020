//! Game Boy and Game Boy Color system implementation
//!
//! This module provides an emulator for the Nintendo Game Boy (DMG) and Game Boy Color (GBC) systems.
//! The implementation includes CPU emulation (Sharp LR35902), PPU (LCD controller), memory bus with
//! joypad support, and basic cartridge loading.
//!
//! # Architecture
//!
//! The Game Boy system consists of several key components:
//!
//! ## CPU: Sharp LR35902
//! - Z80-like CPU with some instructions removed and modified
//! - 8-bit registers: A, F, B, C, D, E, H, L (no shadow registers like Z80)
//! - 16-bit registers: SP (stack pointer), PC (program counter)
//! - Flags: Z (Zero), N (Subtract), H (Half Carry), C (Carry)
//! - Clock speed: 4.194304 MHz (~4.2 MHz)
//! - Implementation in `crates/core/src/cpu_lr35902.rs`
//!
//! ## PPU (Picture Processing Unit)
//! - Resolution: 160x144 pixels
//! - Display modes: DMG (4 shades of gray), CGB (32,768 colors)
//! - **Current implementation**: DMG mode only
//! - Supports:
//!   - Background layer with scrolling (SCX/SCY registers)
//!   - Window layer (overlay window with separate position)
//!   - 40 sprites (8x8 or 8x16 pixels)
//!   - Up to 10 sprites per scanline
//!   - Sprite priority and transparency
//!   - Horizontal/vertical sprite flipping
//! - Tile-based graphics (8x8 pixel tiles, 2 bits per pixel)
//! - Two tile data areas: $8000-$8FFF and $8800-$97FF
//! - Two tile map areas: $9800-$9BFF and $9C00-$9FFF
//!
//! ## Memory Map
//! - `$0000-$3FFF`: ROM Bank 0 (16KB, fixed)
//! - `$4000-$7FFF`: ROM Bank 1-N (16KB, switchable via MBC)
//! - `$8000-$9FFF`: VRAM (8KB, video RAM)
//! - `$A000-$BFFF`: External RAM (8KB, switchable via MBC)
//! - `$C000-$DFFF`: Work RAM (8KB)
//! - `$E000-$FDFF`: Echo RAM (mirror of $C000-$DDFF)
//! - `$FE00-$FE9F`: OAM (Object Attribute Memory - 160 bytes)
//! - `$FF00-$FF7F`: I/O Registers
//! - `$FF80-$FFFE`: High RAM (127 bytes)
//! - `$FFFF`: Interrupt Enable register
//!
//! ## I/O Registers
//! - `$FF00`: Joypad input (P1)
//! - `$FF01-$FF02`: Serial transfer data/control (register sink only)
//! - `$FF04-$FF07`: Timer (DIV, TIMA, TMA, TAC)
//! - `$FF0F`: Interrupt Flag (IF)
//! - `$FF10-$FF14`: APU Pulse 1 (sweep, duty, envelope, frequency)
//! - `$FF16-$FF19`: APU Pulse 2 (duty, envelope, frequency)
//! - `$FF1A-$FF1E`: APU Wave (DAC, length, volume, frequency)
//! - `$FF20-$FF23`: APU Noise (length, envelope, polynomial, control)
//! - `$FF24-$FF26`: APU Master (volume, panning, power)
//! - `$FF30-$FF3F`: Wave RAM (16 bytes, 32 x 4-bit samples)
//! - `$FF40`: LCD Control (LCDC)
//! - `$FF41`: LCD Status (STAT)
//! - `$FF42-$FF43`: Scroll registers (SCY, SCX)
//! - `$FF44`: LCD Y coordinate (LY)
//! - `$FF45`: LY Compare (LYC)
//! - `$FF46`: OAM DMA source page
//! - `$FF47-$FF49`: Palette registers (BGP, OBP0, OBP1)
//! - `$FF4A-$FF4B`: Window position (WY, WX)
//! - `$FF4D`: Speed switch (KEY1, CGB)
//! - `$FF4F`: VRAM bank select (VBK, CGB)
//! - `$FF50`: Boot ROM disable
//! - `$FF51-$FF55`: VRAM DMA (HDMA, CGB, simplified as immediate GDMA)
//! - `$FF68-$FF6B`: Background/object palette RAM (BCPS/BCPD/OCPS/OCPD, CGB)
//! - `$FF6C`: Object priority mode (OPRI, CGB)
//! - `$FF70`: WRAM bank select (SVBK, CGB)
//! - `$FFFF`: Interrupt Enable (IE)
//!
//! ## Joypad Input
//! The joypad register ($FF00) uses a matrix system:
//! - Bit 5: Select button keys (0 = selected)
//! - Bit 4: Select direction keys (0 = selected)
//! - Bits 3-0: Input bits (0 = pressed, 1 = not pressed)
//!   - Button mode: Start, Select, B, A
//!   - Direction mode: Down, Up, Left, Right
//!
//! # Timing
//!
//! - CPU clock: 4.194304 MHz
//! - Frame rate: ~59.73 Hz
//! - Cycles per frame: ~70,224
//! - Scanline cycles: 456 dots (114 machine cycles)
//! - Scanlines per frame: 154 (144 visible + 10 VBlank)
//!
//! The bus advances every peripheral (PPU, timer, APU, cartridge RTC, OAM
//! DMA) by exactly one M-cycle inside each `read`/`write`/`tick` call the
//! CPU makes, so the PPU's mode state machine and the timer's falling-edge
//! detection stay in lockstep with CPU execution rather than being stepped
//! in bulk after whole instructions.
//!
//! # Usage Example
//!
//! ```rust,no_run
//! use emu_core::System;
//! use emu_gb::GbSystem;
//!
//! // Create a new Game Boy system
//! let mut gb = GbSystem::new();
//!
//! // Load a ROM
//! let rom_data = std::fs::read("game.gb").unwrap();
//! gb.mount("Cartridge", &rom_data).unwrap();
//!
//! // Set controller state (buttons: Right=0, Left=1, Up=2, Down=3, A=4, B=5, Select=6, Start=7)
//! gb.set_controller(0x00); // All buttons released
//! gb.set_controller(0x10); // A button pressed
//!
//! // Run one frame
//! let frame = gb.step_frame().unwrap();
//! assert_eq!(frame.width, 160);
//! assert_eq!(frame.height, 144);
//! ```

use emu_core::{cpu_lr35902::CpuLr35902, types::Frame, MountPointInfo, System};

mod apu;
mod bus;
mod cartridge;
mod interrupts;
mod joypad;
mod mappers;
pub(crate) mod ppu;
mod timer;

use bus::GbBus;
use cartridge::CartridgeError;

pub struct GbSystem {
    cpu: CpuLr35902<GbBus>,
    cart_loaded: bool,
}

impl Default for GbSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl GbSystem {
    pub fn new() -> Self {
        let bus = GbBus::new();
        let mut cpu = CpuLr35902::new(bus);
        cpu.reset();

        Self {
            cpu,
            cart_loaded: false,
        }
    }

    /// Set controller state (Game Boy buttons)
    /// Bits: 0=Right, 1=Left, 2=Up, 3=Down, 4=A, 5=B, 6=Select, 7=Start
    pub fn set_controller(&mut self, state: u8) {
        self.cpu.memory.set_buttons(state);
    }

    /// Whether the mounted cartridge has battery-backed RAM worth persisting
    /// to a `<rom>.sav` sidecar file.
    pub fn has_battery_ram(&self) -> bool {
        self.cpu.memory.cart_has_battery()
    }

    /// Battery RAM (plus a trailing RTC block for MBC3) of the mounted
    /// cartridge, suitable for writing to a `<rom>.sav` sidecar file.
    pub fn battery_ram(&self) -> Option<Vec<u8>> {
        self.cpu.memory.battery_save_data()
    }

    /// Restore battery RAM previously read back from a `<rom>.sav` sidecar
    /// file.
    pub fn load_battery_ram(&mut self, data: &[u8]) {
        self.cpu.memory.load_battery_save_data(data);
    }

    /// Enable or disable the CPU's instruction-history ring buffer, for the
    /// `-debug` CLI surface.
    pub fn set_debug(&mut self, enabled: bool) {
        self.cpu.set_debug(enabled);
        let level = if enabled { emu_core::logging::LogLevel::Trace } else { emu_core::logging::LogLevel::Off };
        emu_core::logging::LogConfig::global().set_global_level(level);
    }

    /// Render the current VRAM/OAM state with WX=WY=SCX=SCY hardcoded to 0,
    /// ignoring the live scroll/window registers. Used by the headless
    /// `--test` fast path so its output doesn't depend on whatever scroll
    /// position a ROM happened to leave behind.
    pub fn fixed_scroll_frame(&self) -> Frame {
        self.cpu.memory.ppu.render_frame_fixed_scroll()
    }

    /// Combined CPU register dump, LCDC/STAT/LY/LYC/IE/IF dump, and recent
    /// instruction history, formatted for `-debug` output.
    pub fn debug_dump(&self) -> String {
        let history = self.cpu.history_dump();
        let history = if history.is_empty() {
            "(history disabled)".to_string()
        } else {
            history.join("\n  ")
        };
        format!(
            "{}\n{}\nrecent instructions:\n  {}",
            self.cpu.register_dump(),
            self.cpu.memory.io_dump(),
            history,
        )
    }
}

#[derive(thiserror::Error, Debug)]
pub enum GbError {
    #[error("No cartridge loaded")]
    NoCartridge,
    #[error("Invalid mount point")]
    InvalidMountPoint,
    #[error("invalid cartridge: {0}")]
    Cartridge(#[from] CartridgeError),
    #[error("undefined opcode encountered at PC={0:#06x}")]
    RuntimeError(u16),
}

impl System for GbSystem {
    type Error = GbError;

    fn reset(&mut self) {
        self.cpu.reset();
    }

    fn step_frame(&mut self) -> Result<Frame, Self::Error> {
        if !self.cart_loaded {
            return Err(GbError::NoCartridge);
        }

        // Game Boy runs at ~4.194304 MHz
        // Frame rate is ~59.73 Hz
        // Cycles per frame: 4194304 / 59.73 ≈ 70224 cycles
        const CYCLES_PER_FRAME: u32 = 70224;

        // Each cpu.step() call drives the bus's read/write/tick methods,
        // which advance the PPU/timer/APU/cartridge RTC by one M-cycle per
        // call -- so the PPU's own mode state machine is already current
        // by the time a frame's worth of cycles have elapsed here.
        let mut cycles = 0;
        while cycles < CYCLES_PER_FRAME {
            cycles += self.cpu.step();
            if let Some(pc) = self.cpu.illegal_opcode() {
                return Err(GbError::RuntimeError(pc));
            }
        }

        Ok(self.cpu.memory.ppu.current_frame())
    }

    fn save_state(&self) -> serde_json::Value {
        serde_json::json!({
            "system": "gb",
            "version": 1,
            "cpu": {
                "a": self.cpu.a,
                "f": self.cpu.f,
                "b": self.cpu.b,
                "c": self.cpu.c,
                "d": self.cpu.d,
                "e": self.cpu.e,
                "h": self.cpu.h,
                "l": self.cpu.l,
                "sp": self.cpu.sp,
                "pc": self.cpu.pc,
                "ime": self.cpu.ime,
                "halted": self.cpu.halted,
                "stopped": self.cpu.stopped,
            }
        })
    }

    fn load_state(&mut self, v: &serde_json::Value) -> Result<(), serde_json::Error> {
        macro_rules! load_u8 {
            ($state:expr, $field:literal, $target:expr) => {
                if let Some(val) = $state.get($field).and_then(|v| v.as_u64()) {
                    $target = val as u8;
                }
            };
        }

        macro_rules! load_u16 {
            ($state:expr, $field:literal, $target:expr) => {
                if let Some(val) = $state.get($field).and_then(|v| v.as_u64()) {
                    $target = val as u16;
                }
            };
        }

        macro_rules! load_bool {
            ($state:expr, $field:literal, $target:expr) => {
                if let Some(val) = $state.get($field).and_then(|v| v.as_bool()) {
                    $target = val;
                }
            };
        }

        if let Some(cpu_state) = v.get("cpu") {
            load_u8!(cpu_state, "a", self.cpu.a);
            load_u8!(cpu_state, "f", self.cpu.f);
            load_u8!(cpu_state, "b", self.cpu.b);
            load_u8!(cpu_state, "c", self.cpu.c);
            load_u8!(cpu_state, "d", self.cpu.d);
            load_u8!(cpu_state, "e", self.cpu.e);
            load_u8!(cpu_state, "h", self.cpu.h);
            load_u8!(cpu_state, "l", self.cpu.l);
            load_u16!(cpu_state, "sp", self.cpu.sp);
            load_u16!(cpu_state, "pc", self.cpu.pc);
            load_bool!(cpu_state, "ime", self.cpu.ime);
            load_bool!(cpu_state, "halted", self.cpu.halted);
            load_bool!(cpu_state, "stopped", self.cpu.stopped);
        }
        Ok(())
    }

    fn supports_save_states(&self) -> bool {
        true
    }

    fn mount_points(&self) -> Vec<MountPointInfo> {
        vec![MountPointInfo {
            id: "Cartridge".to_string(),
            name: "Cartridge Slot".to_string(),
            extensions: vec!["gb".to_string(), "gbc".to_string()],
            required: true,
        }]
    }

    fn mount(&mut self, mount_point_id: &str, data: &[u8]) -> Result<(), Self::Error> {
        if mount_point_id != "Cartridge" {
            return Err(GbError::InvalidMountPoint);
        }

        self.cpu.memory.load_cart(data)?;
        self.cart_loaded = true;
        self.reset();

        Ok(())
    }

    fn unmount(&mut self, mount_point_id: &str) -> Result<(), Self::Error> {
        if mount_point_id != "Cartridge" {
            return Err(GbError::InvalidMountPoint);
        }

        self.cart_loaded = false;
        Ok(())
    }

    fn is_mounted(&self, mount_point_id: &str) -> bool {
        mount_point_id == "Cartridge" && self.cart_loaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gb_system_creation() {
        let sys = GbSystem::new();
        assert!(!sys.cart_loaded);
    }

    #[test]
    fn test_gb_mount_points() {
        let sys = GbSystem::new();
        let mount_points = sys.mount_points();
        assert_eq!(mount_points.len(), 1);
        assert_eq!(mount_points[0].id, "Cartridge");
        assert!(mount_points[0].required);
    }

    #[test]
    fn test_gb_mount_unmount() {
        let mut sys = GbSystem::new();
        assert!(!sys.is_mounted("Cartridge"));

        // Mount a minimal ROM
        let rom = vec![0; 0x8000]; // 32KB ROM
        assert!(sys.mount("Cartridge", &rom).is_ok());
        assert!(sys.is_mounted("Cartridge"));

        assert!(sys.unmount("Cartridge").is_ok());
        assert!(!sys.is_mounted("Cartridge"));
    }

    #[test]
    fn test_gb_save_load_state() {
        let sys = GbSystem::new();
        let state = sys.save_state();
        assert_eq!(state["system"], "gb");
        assert_eq!(state["version"], 1);

        let mut sys2 = GbSystem::new();
        assert!(sys2.load_state(&state).is_ok());
    }

    #[test]
    fn test_gb_supports_save_states() {
        let sys = GbSystem::new();
        assert!(sys.supports_save_states());
    }

    #[test]
    fn test_gb_step_frame_without_cart() {
        let mut sys = GbSystem::new();
        let result = sys.step_frame();
        assert!(result.is_err());
    }

    #[test]
    fn test_gb_step_frame_with_cart() {
        let mut sys = GbSystem::new();
        let rom = vec![0; 0x8000];
        sys.mount("Cartridge", &rom).unwrap();

        let result = sys.step_frame();
        assert!(result.is_ok());
        let frame = result.unwrap();
        assert_eq!(frame.width, 160);
        assert_eq!(frame.height, 144);
    }

    #[test]
    fn test_gb_controller_input() {
        let mut sys = GbSystem::new();

        // Test setting controller state
        sys.set_controller(0xFF); // All buttons released

        // Test individual buttons
        sys.set_controller(0x01); // Right pressed
        sys.set_controller(0x10); // A pressed
        sys.set_controller(0x80); // Start pressed
    }

    #[test]
    fn test_gb_ppu_registers() {
        let sys = GbSystem::new();

        // Verify initial PPU register values
        assert_eq!(sys.cpu.memory.ppu.lcdc, 0x91);
        assert_eq!(sys.cpu.memory.ppu.bgp, 0xFC);
        assert_eq!(sys.cpu.memory.ppu.ly, 0);
    }

    /// Build a minimal, header-valid ROM-only cartridge image: no logo
    /// checksum validation is performed, the reset vector just loops forever.
    fn build_minimal_rom(cgb_flag: u8) -> Vec<u8> {
        let mut rom = vec![0u8; 0x8000]; // 32 KiB, cart type 0x00 fits exactly
        rom[0x0100] = 0x00; // NOP
        rom[0x0101] = 0xC3; // JP 0x0150
        rom[0x0102] = 0x50;
        rom[0x0103] = 0x01;
        rom[0x0143] = cgb_flag;
        rom[0x0147] = 0x00; // ROM ONLY
        rom[0x0148] = 0x00; // 32 KiB, 2 banks
        rom[0x0149] = 0x00; // no external RAM
        rom[0x0150] = 0x18; // JR -2 (infinite loop)
        rom[0x0151] = 0xFE;
        rom
    }

    /// Same as `build_minimal_rom`, but declared as an MBC3+RAM+BATTERY
    /// cartridge with 8 KiB of external RAM.
    fn build_battery_backed_rom() -> Vec<u8> {
        let mut rom = vec![0u8; 0x8000];
        rom[0x0100] = 0x00;
        rom[0x0101] = 0xC3;
        rom[0x0102] = 0x50;
        rom[0x0103] = 0x01;
        rom[0x0147] = 0x13; // MBC3+RAM+BATTERY
        rom[0x0148] = 0x00;
        rom[0x0149] = 0x02; // 8 KiB RAM
        rom[0x0150] = 0x18;
        rom[0x0151] = 0xFE;
        rom
    }

    #[test]
    fn test_gb_battery_ram_round_trip() {
        let mut sys = GbSystem::new();
        let rom = build_battery_backed_rom();
        sys.mount("Cartridge", &rom).unwrap();
        assert!(sys.has_battery_ram());

        let mut saved = sys.battery_ram().unwrap();
        assert_eq!(saved.len(), 8 * 1024 + 5); // RAM + trailing RTC block
        saved[0] = 0x42;

        let mut sys2 = GbSystem::new();
        sys2.mount("Cartridge", &rom).unwrap();
        sys2.load_battery_ram(&saved);
        assert_eq!(sys2.battery_ram().unwrap()[0], 0x42);
    }

    #[test]
    fn test_gb_no_battery_ram_for_rom_only() {
        let sys = GbSystem::new();
        assert!(!sys.has_battery_ram());

        let mut sys = GbSystem::new();
        sys.mount("Cartridge", &build_minimal_rom(0x00)).unwrap();
        assert!(!sys.has_battery_ram());
    }

    #[test]
    fn test_gb_debug_dump_reports_disabled_history_by_default() {
        let sys = GbSystem::new();
        let dump = sys.debug_dump();
        assert!(dump.contains("PC:"));
        assert!(dump.contains("LCDC:"));
        assert!(dump.contains("(history disabled)"));
    }

    #[test]
    fn test_gb_debug_dump_shows_history_once_enabled() {
        let mut sys = GbSystem::new();
        sys.mount("Cartridge", &build_minimal_rom(0x00)).unwrap();
        sys.set_debug(true);
        sys.step_frame().unwrap();
        assert!(!sys.debug_dump().contains("(history disabled)"));
    }

    #[test]
    fn test_gb_runtime_error_on_undefined_opcode() {
        let mut rom = build_minimal_rom(0x00);
        rom[0x0150] = 0xD3; // undefined opcode, in place of the infinite loop
        let mut sys = GbSystem::new();
        sys.mount("Cartridge", &rom).unwrap();
        match sys.step_frame() {
            Err(GbError::RuntimeError(pc)) => assert_eq!(pc, 0x0150),
            other => panic!("expected RuntimeError, got {other:?}"),
        }
    }

    #[test]
    fn test_gb_smoke_test_rom() {
        let rom = build_minimal_rom(0x00);
        let mut sys = GbSystem::new();

        assert!(sys.mount("Cartridge", &rom).is_ok());
        assert!(sys.is_mounted("Cartridge"));

        let mut frame = sys.step_frame().unwrap();
        for _ in 0..9 {
            frame = sys.step_frame().unwrap();
        }

        assert_eq!(frame.width, 160);
        assert_eq!(frame.height, 144);
        assert_eq!(frame.pixels.len(), 160 * 144);
    }

    #[test]
    fn test_gbc_smoke_test_rom() {
        // CGB-only flag; should still boot and render in the absence of a
        // boot ROM enforcing DMG/CGB mode switches at this layer.
        let rom = build_minimal_rom(0xC0);
        let mut sys = GbSystem::new();

        assert!(sys.mount("Cartridge", &rom).is_ok());
        assert!(sys.is_mounted("Cartridge"));

        let mut frame = sys.step_frame().unwrap();
        for _ in 0..9 {
            frame = sys.step_frame().unwrap();
        }

        assert_eq!(frame.width, 160);
        assert_eq!(frame.height, 144);
        assert_eq!(frame.pixels.len(), 160 * 144);
    }
}

#[cfg(test)]
