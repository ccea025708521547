use std::{fmt, path::Path};

use bevy::{
    input::keyboard::{Key, KeyboardInput},
    prelude::*,
    window::PrimaryWindow,
};

use crate::{
    data::{rng::GlobalRng, settings::AppSettings},
    startup::fonts::GlyphFont,
};

pub mod catalog;
pub mod glyph;
mod input;
pub mod resolve;
pub mod voice;

use catalog::FsCatalog;
use glyph::Glyph;
use resolve::resolve;
use voice::Voice;

pub struct LettersPlugin;
impl Plugin for LettersPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveState>()
            .add_systems(Startup, LetterCatalog::setup)
            .add_systems(Update, ActiveState::update);
    }
}

/// Single uppercased alphanumeric character; the activation key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(char);

impl Symbol {
    /// Accepts a payload of exactly one ASCII alphanumeric character,
    /// uppercased. Everything else is not a symbol.
    pub fn from_payload(payload: &str) -> Option<Symbol> {
        let mut chars = payload.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) if ch.is_ascii_alphanumeric() => {
                Some(Symbol(ch.to_ascii_uppercase()))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Name of one content instance under a symbol (a variant directory name).
pub type Variant = String;

/// (Symbol, Variant) pair naming the concrete color and audio assets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceKey {
    pub symbol: Symbol,
    pub variant: Variant,
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.symbol, self.variant)
    }
}

/// The single record of what is on screen and in the air. The renderer and
/// the voice slot own their own progress flags; the controller only polls
/// them to decide when this record goes back to idle.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveState {
    symbol: Option<Symbol>,
    variant: Option<Variant>,
}

#[derive(Resource)]
pub struct LetterCatalog(pub FsCatalog);

impl LetterCatalog {
    fn setup(mut commands: Commands, settings: Res<AppSettings>) {
        commands.insert_resource(LetterCatalog(FsCatalog::new(
            Path::new("assets").join(&settings.store_root),
            &settings.store_root,
        )));
    }
}

impl ActiveState {
    /// Both flags down means the last activation fully played out; clearing
    /// the record re-arms the same key for a fresh activation.
    pub fn rearm_if_idle(&mut self, drawing: bool, playing: bool) {
        if !drawing && !playing {
            self.symbol = None;
            self.variant = None;
        }
    }

    /// Replaces the record wholesale. Only called for a key that resolved,
    /// so a failed resolution never moves the state.
    pub fn activate(&mut self, key: &ResourceKey) {
        self.symbol = Some(key.symbol);
        self.variant = Some(key.variant.clone());
    }

    /// One full controller pass per frame tick: re-arm if idle, scan the
    /// frame's events, and on an activation resolve the symbol to a variant
    /// and hand the same resolved key to the renderer and the voice slot,
    /// in that order.
    pub fn update(
        mut commands: Commands,
        mut events: EventReader<KeyboardInput>,
        mut state: ResMut<ActiveState>,
        mut rng: ResMut<GlobalRng>,
        mut clear_color: ResMut<ClearColor>,
        catalog: Res<LetterCatalog>,
        settings: Res<AppSettings>,
        font: Res<GlyphFont>,
        asset_server: Res<AssetServer>,
        windows: Query<&Window, With<PrimaryWindow>>,
        glyphs: Query<(Entity, &Glyph)>,
        voices: Query<(Entity, Option<&AudioSink>), With<Voice>>,
    ) {
        let Ok(window) = windows.single() else {
            return;
        };

        let drawing = glyphs.iter().any(|(_, glyph)| glyph.is_drawing());
        state.rearm_if_idle(drawing, Voice::any_busy(&voices));

        let payloads: Vec<String> = events
            .read()
            .filter_map(|event| {
                if settings.log_events {
                    debug!("{event:?}");
                }
                if !event.state.is_pressed() {
                    return None;
                }
                match &event.logical_key {
                    Key::Character(text) => Some(text.to_string()),
                    _ => None,
                }
            })
            .collect();

        if let Some(symbol) = input::first_activation(&state, payloads.iter().map(String::as_str))
        {
            match resolve(symbol, &catalog.0, &mut rng.0) {
                Ok(key) => {
                    info!("selected variant {key}");
                    state.activate(&key);
                    Glyph::draw(
                        &mut commands,
                        &glyphs,
                        &mut clear_color,
                        &catalog.0,
                        &font,
                        window,
                        &settings,
                        &key,
                        0,
                    );
                    Voice::dispatch(&mut commands, &voices, &asset_server, &catalog.0, &settings, &key);
                }
                Err(error) => warn!("{error}"),
            }
        } else if let Some((key, frame)) = glyphs.iter().find_map(|(_, glyph)| glyph.unfinished_frame())
        {
            // A draw that did not complete last frame picks up where it
            // left off.
            Glyph::draw(
                &mut commands,
                &glyphs,
                &mut clear_color,
                &catalog.0,
                &font,
                window,
                &settings,
                &key,
                frame,
            );
        }
    }
}
