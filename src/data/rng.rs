use bevy::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

use crate::data::settings::AppSettings;

pub struct RngPlugin;
impl Plugin for RngPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(GlobalRng::default())
            .add_systems(PreStartup, GlobalRng::reseed);
    }
}

#[derive(Resource)]
pub struct GlobalRng(pub Pcg64Mcg);

impl Default for GlobalRng {
    fn default() -> Self {
        GlobalRng(Pcg64Mcg::seed_from_u64(12345))
    }
}

impl GlobalRng {
    fn reseed(mut rng: ResMut<GlobalRng>, settings: Res<AppSettings>) {
        rng.0 = match settings.seed {
            Some(seed) => Pcg64Mcg::seed_from_u64(seed),
            None => Pcg64Mcg::from_os_rng(),
        };
    }
}
