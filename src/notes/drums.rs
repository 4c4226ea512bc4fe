// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! General MIDI percussion to haptic mapping.

/// MIDI channel carrying percussion (channel 10, zero based)
pub const DRUM_CHANNEL: u8 = 9;

/// Sharpness for percussion keys with no table entry
pub const UNMAPPED_DRUM_SHARPNESS: f64 = 0.7;

/// Standard GM drum note numbers
pub mod gm_drums {
    pub const ACOUSTIC_KICK: u8 = 35;
    pub const KICK: u8 = 36;
    pub const RIM: u8 = 37;
    pub const SNARE: u8 = 38;
    pub const CLAP: u8 = 39;
    pub const ELECTRIC_SNARE: u8 = 40;
    pub const CLOSED_HAT: u8 = 42;
    pub const PEDAL_HAT: u8 = 44;
    pub const LOW_TOM: u8 = 45;
    pub const OPEN_HAT: u8 = 46;
    pub const MID_TOM: u8 = 47;
    pub const CRASH: u8 = 49;
    pub const HIGH_TOM: u8 = 50;
    pub const RIDE: u8 = 51;
    pub const COWBELL: u8 = 56;
    pub const OPEN_TRIANGLE: u8 = 81;
}

/// Haptic character of one percussion sound
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrumMapping {
    pub name: &'static str,
    /// Intensity at full velocity
    pub intensity: f64,
    pub sharpness: f64,
}

impl DrumMapping {
    const fn new(name: &'static str, intensity: f64, sharpness: f64) -> Self {
        Self {
            name,
            intensity,
            sharpness,
        }
    }
}

/// Look up the haptic mapping for a percussion key.
///
/// Low drums are heavy and dull, cymbals and hats light and sharp.
pub fn drum_mapping(key: u8) -> Option<DrumMapping> {
    let mapping = match key {
        // Bass drums
        35 => DrumMapping::new("Acoustic Bass Drum", 1.0, 0.2),
        36 => DrumMapping::new("Bass Drum 1", 1.0, 0.2),

        // Snares
        38 => DrumMapping::new("Acoustic Snare", 0.95, 0.85),
        40 => DrumMapping::new("Electric Snare", 0.9, 0.9),

        // Toms
        41 => DrumMapping::new("Low Floor Tom", 0.85, 0.4),
        43 => DrumMapping::new("High Floor Tom", 0.85, 0.45),
        45 => DrumMapping::new("Low Tom", 0.85, 0.5),
        47 => DrumMapping::new("Low-Mid Tom", 0.85, 0.55),
        48 => DrumMapping::new("Hi-Mid Tom", 0.85, 0.6),
        50 => DrumMapping::new("High Tom", 0.85, 0.65),

        // Hi-hats
        42 => DrumMapping::new("Closed Hi-Hat", 0.5, 1.0),
        44 => DrumMapping::new("Pedal Hi-Hat", 0.55, 0.95),
        46 => DrumMapping::new("Open Hi-Hat", 0.6, 0.9),

        // Cymbals
        49 => DrumMapping::new("Crash Cymbal 1", 0.9, 0.85),
        51 => DrumMapping::new("Ride Cymbal 1", 0.7, 0.75),
        52 => DrumMapping::new("Chinese Cymbal", 0.85, 0.8),
        53 => DrumMapping::new("Ride Bell", 0.65, 0.7),
        55 => DrumMapping::new("Splash Cymbal", 0.8, 0.9),
        57 => DrumMapping::new("Crash Cymbal 2", 0.9, 0.85),
        59 => DrumMapping::new("Ride Cymbal 2", 0.7, 0.75),

        // Percussion
        37 => DrumMapping::new("Side Stick", 0.7, 0.95),
        39 => DrumMapping::new("Hand Clap", 0.75, 0.8),
        54 => DrumMapping::new("Tambourine", 0.65, 0.85),
        56 => DrumMapping::new("Cowbell", 0.7, 0.7),
        58 => DrumMapping::new("Vibraslap", 0.7, 0.75),
        60 => DrumMapping::new("Hi Bongo", 0.75, 0.6),
        61 => DrumMapping::new("Low Bongo", 0.75, 0.5),
        62 => DrumMapping::new("Mute Hi Conga", 0.75, 0.65),
        63 => DrumMapping::new("Open Hi Conga", 0.75, 0.6),
        64 => DrumMapping::new("Low Conga", 0.75, 0.55),
        65 => DrumMapping::new("High Timbale", 0.8, 0.7),
        66 => DrumMapping::new("Low Timbale", 0.8, 0.65),
        67 => DrumMapping::new("High Agogo", 0.7, 0.8),
        68 => DrumMapping::new("Low Agogo", 0.7, 0.75),
        69 => DrumMapping::new("Cabasa", 0.65, 0.7),
        70 => DrumMapping::new("Maracas", 0.6, 0.85),
        71 => DrumMapping::new("Short Whistle", 0.6, 0.9),
        72 => DrumMapping::new("Long Whistle", 0.6, 0.85),
        73 => DrumMapping::new("Short Guiro", 0.65, 0.75),
        74 => DrumMapping::new("Long Guiro", 0.65, 0.7),
        75 => DrumMapping::new("Claves", 0.7, 0.95),
        76 => DrumMapping::new("Hi Wood Block", 0.7, 0.8),
        77 => DrumMapping::new("Low Wood Block", 0.7, 0.75),
        78 => DrumMapping::new("Mute Cuica", 0.65, 0.7),
        79 => DrumMapping::new("Open Cuica", 0.65, 0.75),
        80 => DrumMapping::new("Mute Triangle", 0.6, 0.9),
        81 => DrumMapping::new("Open Triangle", 0.6, 0.95),

        _ => return None,
    };
    Some(mapping)
}
