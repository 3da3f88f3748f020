//! Centralized logging configuration for the emulator.
//!
//! This module provides a unified logging system that replaces the old
//! environment variable-based approach with a more structured command-line
//! configuration system.
//!
//! # Architecture
//!
//! - **LogConfig**: Thread-safe global configuration using atomic operations
//! - **LogLevel**: Hierarchical log levels (Off < Error < Warn < Info < Debug < Trace)
//! - **LogCategory**: Different logging categories (CPU, Bus, PPU, APU, Interrupts, Stubs)
//!
//! # Usage
//!
//! ```rust
//! use emu_core::logging::{LogConfig, LogLevel, LogCategory};
//!
//! // Initialize logging from command-line args
//! LogConfig::global().set_level(LogCategory::CPU, LogLevel::Debug);
//!
//! // Check if logging is enabled for a category
//! if LogConfig::global().should_log(LogCategory::CPU, LogLevel::Info) {
//!     eprintln!("CPU: Something happened");
//! }
//! ```

use std::sync::atomic::{AtomicU8, Ordering};

/// Log level for controlling verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum LogLevel {
    Off = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl LogLevel {
    /// Parse log level from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "off" | "0" => Some(LogLevel::Off),
            "error" | "err" | "1" => Some(LogLevel::Error),
            "warn" | "warning" | "2" => Some(LogLevel::Warn),
            "info" | "3" => Some(LogLevel::Info),
            "debug" | "4" => Some(LogLevel::Debug),
            "trace" | "5" => Some(LogLevel::Trace),
            _ => None,
        }
    }

    /// Convert to u8 for atomic storage
    fn to_u8(self) -> u8 {
        self as u8
    }

    /// Convert from u8 for atomic loading
    fn from_u8(val: u8) -> Self {
        match val {
            0 => LogLevel::Off,
            1 => LogLevel::Error,
            2 => LogLevel::Warn,
            3 => LogLevel::Info,
            4 => LogLevel::Debug,
            5 => LogLevel::Trace,
            _ => LogLevel::Off,
        }
    }
}

/// Log category for different emulator components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogCategory {
    /// CPU execution (instruction execution, PC tracing)
    CPU,
    /// Bus/memory access
    Bus,
    /// PPU/graphics (register writes, rendering)
    PPU,
    /// APU/audio
    APU,
    /// Interrupts (IRQ, NMI)
    Interrupts,
    /// Unimplemented features/stubs
    Stubs,
}

/// Global logging configuration
pub struct LogConfig {
    /// Global log level (applies to all categories unless overridden)
    global_level: AtomicU8,
    /// CPU-specific log level
    cpu_level: AtomicU8,
    /// Bus-specific log level
    bus_level: AtomicU8,
    /// PPU-specific log level
    ppu_level: AtomicU8,
    /// APU-specific log level
    apu_level: AtomicU8,
    /// Interrupt-specific log level
    interrupt_level: AtomicU8,
    /// Stub/unimplemented feature log level
    stub_level: AtomicU8,
}

impl LogConfig {
    /// Create a new LogConfig with all logging disabled
    const fn new() -> Self {
        Self {
            global_level: AtomicU8::new(LogLevel::Off as u8),
            cpu_level: AtomicU8::new(LogLevel::Off as u8),
            bus_level: AtomicU8::new(LogLevel::Off as u8),
            ppu_level: AtomicU8::new(LogLevel::Off as u8),
            apu_level: AtomicU8::new(LogLevel::Off as u8),
            interrupt_level: AtomicU8::new(LogLevel::Off as u8),
            stub_level: AtomicU8::new(LogLevel::Off as u8),
        }
    }

    /// Get the global singleton instance
    pub fn global() -> &'static Self {
        static INSTANCE: LogConfig = LogConfig::new();
        &INSTANCE
    }

    /// Set the global log level (applies to all categories unless overridden)
    pub fn set_global_level(&self, level: LogLevel) {
        self.global_level.store(level.to_u8(), Ordering::Relaxed);
    }

    /// Get the global log level
    pub fn get_global_level(&self) -> LogLevel {
        LogLevel::from_u8(self.global_level.load(Ordering::Relaxed))
    }

    /// Set log level for a specific category
    pub fn set_level(&self, category: LogCategory, level: LogLevel) {
        let atomic = match category {
            LogCategory::CPU => &self.cpu_level,
            LogCategory::Bus => &self.bus_level,
            LogCategory::PPU => &self.ppu_level,
            LogCategory::APU => &self.apu_level,
            LogCategory::Interrupts => &self.interrupt_level,
            LogCategory::Stubs => &self.stub_level,
        };
        atomic.store(level.to_u8(), Ordering::Relaxed);
    }

    /// Get log level for a specific category
    pub fn get_level(&self, category: LogCategory) -> LogLevel {
        let atomic = match category {
            LogCategory::CPU => &self.cpu_level,
            LogCategory::Bus => &self.bus_level,
            LogCategory::PPU => &self.ppu_level,
            LogCategory::APU => &self.apu_level,
            LogCategory::Interrupts => &self.interrupt_level,
            LogCategory::Stubs => &self.stub_level,
        };
        LogLevel::from_u8(atomic.load(Ordering::Relaxed))
    }

    /// Check if a message should be logged for the given category and level
    ///
    /// Returns true if:
    /// 1. The category-specific level is set and >= the message level, OR
    /// 2. The category-specific level is Off AND the global level >= the message level
    pub fn should_log(&self, category: LogCategory, level: LogLevel) -> bool {
        let category_level = self.get_level(category);
        if category_level != LogLevel::Off {
            // Category has a specific level set
            level <= category_level
        } else {
            // Fall back to global level
            level <= self.get_global_level()
        }
    }

    /// Initialize logging from environment variables (for backward compatibility)
    ///
    /// This provides a migration path from the old ENV-based system.
    /// Emits deprecation warnings when ENV variables are detected.
    #[allow(deprecated)]
    pub fn init_from_env(&self) {
        use std::env;

        // Map old ENV variables to new logging system
        let env_mappings = [
            ("EMU_LOG_UNKNOWN_OPS", LogCategory::Stubs, LogLevel::Info),
            ("EMU_LOG_BRK", LogCategory::CPU, LogLevel::Debug),
            ("EMU_LOG_PPU_WRITES", LogCategory::PPU, LogLevel::Debug),
            ("EMU_LOG_IRQ", LogCategory::Interrupts, LogLevel::Info),
            ("EMU_TRACE_PC", LogCategory::CPU, LogLevel::Trace),
            (
                "EMU_TRACE_INTERRUPTS",
                LogCategory::Interrupts,
                LogLevel::Debug,
            ),
            ("EMU_LOG_SCANLINE", LogCategory::PPU, LogLevel::Trace),
            ("EMU_LOG_VISIBLE_START", LogCategory::PPU, LogLevel::Debug),
        ];

        let mut any_env_found = false;
        for (env_var, category, level) in env_mappings.iter() {
            if let Ok(val) = env::var(env_var) {
                // Check if it's enabled (1, true, TRUE)
                let enabled = matches!(val.as_str(), "1" | "true" | "TRUE");
                if enabled {
                    any_env_found = true;
                    eprintln!(
                        "DEPRECATION WARNING: Environment variable {} is deprecated. Use command-line flags instead.",
                        env_var
                    );
                    eprintln!(
                        "  Recommended: --log-{} {}",
                        match category {
                            LogCategory::CPU => "cpu",
                            LogCategory::Bus => "bus",
                            LogCategory::PPU => "ppu",
                            LogCategory::APU => "apu",
                            LogCategory::Interrupts => "interrupts",
                            LogCategory::Stubs => "stubs",
                        },
                        match level {
                            LogLevel::Off => "off",
                            LogLevel::Error => "error",
                            LogLevel::Warn => "warn",
                            LogLevel::Info => "info",
                            LogLevel::Debug => "debug",
                            LogLevel::Trace => "trace",
                        }
                    );

                    // Set the logging level
                    let current = self.get_level(*category);
                    if *level > current {
                        self.set_level(*category, *level);
                    }
                }
            }
        }

        if any_env_found {
            eprintln!("\nEnvironment-based logging will be removed in a future version.");
            eprintln!("Please update your workflow to use command-line flags.\n");
        }
    }

    /// Reset all logging to Off
    pub fn reset(&self) {
        self.set_global_level(LogLevel::Off);
        self.set_level(LogCategory::CPU, LogLevel::Off);
        self.set_level(LogCategory::Bus, LogLevel::Off);
        self.set_level(LogCategory::PPU, LogLevel::Off);
        self.set_level(LogCategory::APU, LogLevel::Off);
        self.set_level(LogCategory::Interrupts, LogLevel::Off);
        self.set_level(LogCategory::Stubs, LogLevel::Off);
    }
}

/// Convenience macro for logging
#[macro_export]
macro_rules! log {
    ($category:expr, $level:expr, $($arg:tt)*) => {
        if $crate::logging::LogConfig::global().should_log($category, $level) {
            eprintln!($($arg)*);
        }
    };
}
