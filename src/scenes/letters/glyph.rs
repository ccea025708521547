use bevy::prelude::*;

use super::{catalog::VariantCatalog, ResourceKey};
use crate::{data::settings::AppSettings, startup::fonts::GlyphFont, systems::colors};

/// Progress of a draw. Rendering is synchronous today, so the state jumps
/// straight to `Done`; `InProgress` is the hook for a multi-frame animated
/// draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    NotStarted,
    InProgress(u32),
    Done,
}

/// The fullscreen letter currently on the surface.
#[derive(Component)]
pub struct Glyph {
    pub key: ResourceKey,
    pub animation: AnimationState,
}

impl Glyph {
    fn new(key: ResourceKey) -> Self {
        Self {
            key,
            animation: AnimationState::NotStarted,
        }
    }

    fn begin(&mut self, frame: u32) {
        self.animation = AnimationState::InProgress(frame);
    }

    fn finish(&mut self) {
        self.animation = AnimationState::Done;
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.animation, AnimationState::InProgress(_))
    }

    /// Resume point for a draw that has not completed yet.
    pub fn unfinished_frame(&self) -> Option<(ResourceKey, u32)> {
        match self.animation {
            AnimationState::InProgress(frame) => Some((self.key.clone(), frame)),
            _ => None,
        }
    }

    /// Repaints the surface for a resolved key: background from the key's
    /// descriptor (default on any failure), contrasting text color, the
    /// symbol centered at a size proportional to the window height.
    /// `start_frame` is accepted so an animated draw can slot in later;
    /// every value currently produces the identical complete render.
    pub fn draw(
        commands: &mut Commands,
        existing: &Query<(Entity, &Glyph)>,
        clear_color: &mut ClearColor,
        catalog: &impl VariantCatalog,
        font: &GlyphFont,
        window: &Window,
        settings: &AppSettings,
        key: &ResourceKey,
        start_frame: u32,
    ) {
        let mut glyph = Glyph::new(key.clone());
        glyph.begin(start_frame);

        let background = background_for(catalog, key);
        clear_color.0 = background;

        for (entity, _) in existing.iter() {
            commands.entity(entity).despawn();
        }

        glyph.finish();
        commands.spawn((
            glyph,
            Text2d::new(key.symbol.to_string()),
            TextFont {
                font: font.font.clone(),
                font_size: GlyphFont::scaled_size(settings.glyph_height_ratio, window.height()),
                ..default()
            },
            TextColor(colors::contrasting_text(background)),
        ));
    }
}

/// Background for a key: its descriptor if present and recognised, the
/// default otherwise.
pub fn background_for(catalog: &impl VariantCatalog, key: &ResourceKey) -> Color {
    match catalog.color_descriptor(key) {
        Some(descriptor) => colors::named(&descriptor).unwrap_or_else(|| {
            warn!("unrecognised color {descriptor:?} for {key}; using the default background");
            colors::DEFAULT_BG
        }),
        None => {
            debug!("no color descriptor for {key}; using the default background");
            colors::DEFAULT_BG
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::letters::{catalog::testing::MapCatalog, Symbol};

    fn key(symbol: char, variant: &str) -> ResourceKey {
        ResourceKey {
            symbol: Symbol::from_payload(&symbol.to_string()).expect("test symbol should parse"),
            variant: variant.to_owned(),
        }
    }

    #[test]
    fn white_descriptor_gets_dark_text() {
        let catalog = MapCatalog::default()
            .define("A", &["cat"])
            .color("A/cat", "white");

        let background = background_for(&catalog, &key('A', "cat"));
        assert_eq!(background, colors::LIGHT_BG);
        assert_eq!(colors::contrasting_text(background), colors::DARK_TEXT);
    }

    #[test]
    fn missing_descriptor_falls_back_to_the_default_scheme() {
        let catalog = MapCatalog::default().define("A", &["cat"]);

        let background = background_for(&catalog, &key('A', "cat"));
        assert_eq!(background, colors::DEFAULT_BG);
        assert_eq!(colors::contrasting_text(background), colors::LIGHT_TEXT);
    }

    #[test]
    fn malformed_descriptor_falls_back_to_the_default_scheme() {
        let catalog = MapCatalog::default()
            .define("A", &["cat"])
            .color("A/cat", "not-a-color");

        assert_eq!(background_for(&catalog, &key('A', "cat")), colors::DEFAULT_BG);
    }

    #[test]
    fn colored_descriptor_keeps_light_text() {
        let catalog = MapCatalog::default()
            .define("B", &["ball"])
            .color("B/ball", "blue");

        let background = background_for(&catalog, &key('B', "ball"));
        assert_eq!(colors::contrasting_text(background), colors::LIGHT_TEXT);
    }
}
