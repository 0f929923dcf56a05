//! Tunable gameplay configuration
//!
//! Persisted separately from match state as a flat JSON snapshot. Missing or
//! malformed snapshots silently fall back to the built-in defaults; partial
//! snapshots keep defaults for the fields they omit.

use serde::{Deserialize, Serialize};

/// Difficulty presets (bundle capture/release/gravity tuning)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Preset {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Preset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Easy => "Easy",
            Preset::Normal => "Normal",
            Preset::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Preset::Easy),
            "normal" | "norm" => Some(Preset::Normal),
            "hard" => Some(Preset::Hard),
            _ => None,
        }
    }
}

/// Tunable physical and gameplay constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Hook placement angle in radians (left of straight-down is negative)
    pub hook_angle: f32,
    /// Rope length in length units
    pub rope_len: f32,
    /// Offset subtracted from the rope length when placing the hook tip
    pub hook_inset: f32,
    /// Capture radius around the hook tip
    pub capture_r: f32,
    /// Gravity coefficient, rad/tick²
    pub gravity: f32,
    /// Angular damping factor per tick, (0, 1]
    pub damping: f32,
    /// Release velocity multiplier
    pub release_scale: f32,
    /// Ring hold angle when an attempt is armed
    pub hold_start_angle: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hook_angle: -0.22,
            rope_len: 260.0,
            hook_inset: 0.0,
            capture_r: 28.0,
            gravity: 0.0040,
            damping: 0.9990,
            release_scale: 0.30,
            hold_start_angle: 0.95,
        }
    }
}

impl Config {
    /// Snapshot schema key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "hook-and-ring-config-v1";

    /// Clamp all fields into sane ranges.
    ///
    /// The integrator diverges for damping > 1 and the hook tip leaves the
    /// swing arc for inset ≥ rope length, so out-of-range edits are clamped
    /// here rather than rejected.
    pub fn sanitize(&mut self) {
        self.hook_angle = self.hook_angle.clamp(-0.8, 0.4);
        self.rope_len = self.rope_len.clamp(160.0, 360.0);
        self.hook_inset = self.hook_inset.clamp(0.0, 24.0).min(self.rope_len - 1.0);
        self.capture_r = self.capture_r.clamp(10.0, 50.0);
        self.gravity = self.gravity.clamp(0.001, 0.01);
        self.damping = self.damping.clamp(0.985, 1.0);
        self.release_scale = self.release_scale.clamp(0.10, 0.45);
        self.hold_start_angle = self.hold_start_angle.clamp(-1.2, 1.2);
    }

    /// Merge a partial update, then re-clamp
    pub fn merge(&mut self, patch: &ConfigPatch) {
        if let Some(v) = patch.hook_angle {
            self.hook_angle = v;
        }
        if let Some(v) = patch.rope_len {
            self.rope_len = v;
        }
        if let Some(v) = patch.hook_inset {
            self.hook_inset = v;
        }
        if let Some(v) = patch.capture_r {
            self.capture_r = v;
        }
        if let Some(v) = patch.gravity {
            self.gravity = v;
        }
        if let Some(v) = patch.damping {
            self.damping = v;
        }
        if let Some(v) = patch.release_scale {
            self.release_scale = v;
        }
        if let Some(v) = patch.hold_start_angle {
            self.hold_start_angle = v;
        }
        self.sanitize();
    }

    /// Apply a difficulty preset (leaves layout fields untouched)
    pub fn apply_preset(&mut self, preset: Preset) {
        let (capture_r, release_scale, gravity) = match preset {
            Preset::Easy => (38.0, 0.22, 0.0045),
            Preset::Normal => (28.0, 0.30, 0.0040),
            Preset::Hard => (16.0, 0.34, 0.0036),
        };
        self.capture_r = capture_r;
        self.release_scale = release_scale;
        self.gravity = gravity;
        self.sanitize();
    }

    /// Decode a persisted snapshot, filling omitted fields from defaults.
    /// Malformed input yields the defaults; no error is surfaced.
    pub fn from_snapshot(json: &str) -> Self {
        let mut config = Self::default();
        if let Ok(patch) = serde_json::from_str::<ConfigPatch>(json) {
            config.merge(&patch);
        }
        config
    }

    /// Encode the flat snapshot for persistence
    pub fn to_snapshot(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Load the persisted snapshot from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded config snapshot");
                return Self::from_snapshot(&json);
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Save the snapshot to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            let _ = storage.set_item(Self::STORAGE_KEY, &self.to_snapshot());
            log::info!("Config saved");
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

/// Partial configuration update; `None` fields keep their current value
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigPatch {
    pub hook_angle: Option<f32>,
    pub rope_len: Option<f32>,
    pub hook_inset: Option<f32>,
    pub capture_r: Option<f32>,
    pub gravity: Option<f32>,
    pub damping: Option<f32>,
    pub release_scale: Option<f32>,
    pub hold_start_angle: Option<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_snapshot_falls_back_to_defaults() {
        assert_eq!(Config::from_snapshot("not json at all"), Config::default());
        assert_eq!(Config::from_snapshot(""), Config::default());
    }

    #[test]
    fn test_partial_snapshot_keeps_defaults() {
        let config = Config::from_snapshot(r#"{"capture_r": 40.0}"#);
        assert_eq!(config.capture_r, 40.0);
        assert_eq!(config.rope_len, Config::default().rope_len);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut config = Config::default();
        config.apply_preset(Preset::Hard);
        let restored = Config::from_snapshot(&config.to_snapshot());
        assert_eq!(restored, config);
    }

    #[test]
    fn test_sanitize_clamps_damping() {
        let mut config = Config::default();
        config.merge(&ConfigPatch {
            damping: Some(1.7),
            ..Default::default()
        });
        assert!(config.damping <= 1.0);

        config.merge(&ConfigPatch {
            damping: Some(-0.5),
            ..Default::default()
        });
        assert!(config.damping > 0.0);
    }

    #[test]
    fn test_sanitize_keeps_inset_below_rope() {
        let mut config = Config::default();
        config.merge(&ConfigPatch {
            rope_len: Some(100.0), // clamps up to 160
            hook_inset: Some(500.0),
            ..Default::default()
        });
        assert!(config.hook_inset < config.rope_len);
        assert!(config.hook_inset >= 0.0);
    }

    #[test]
    fn test_presets() {
        let mut easy = Config::default();
        easy.apply_preset(Preset::Easy);
        let mut hard = Config::default();
        hard.apply_preset(Preset::Hard);
        assert!(easy.capture_r > hard.capture_r);
        assert_eq!(easy.hook_angle, hard.hook_angle);
        assert_eq!(Preset::from_str("HARD"), Some(Preset::Hard));
        assert_eq!(Preset::from_str("impossible"), None);
    }
}
