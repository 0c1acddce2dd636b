//! Generated sound-bank identifiers. Do not edit.
//!
//! Regenerate with `cargo xtask regen`.

use crate::table::IdTable;

id_list! {
    /// Event IDs
    pub mod events {
        PLAY_BALLKICK = 4269038391,
        PLAY_BALLLAND = 2501062750,
        PLAY_COWS = 3349065862,
        PLAY_FOOTSTEPS = 3854155799,
        PLAY_SINGLECOWMOOS = 4119342709,
        PLAY_TREES = 767397161,
    }
}

/// State groups
pub mod states {
    use crate::table::GroupDef;

    id_group! {
        MUSICSTATE => musicstate = 1021618141,
        state {
            APPROACHFOREST = 2964660910,
            CUTSCENE = 1182958561,
            DARKFOREST = 1354503558,
            GAMESTART = 4058101365,
            NONE = 748895195,
            RIDINGFAST = 1638220724,
            SILENTDARKFOREST = 3966578065,
            STOPRIDING = 1913579114,
        }
    }

    id_group! {
        REGION => region = 1374134669,
        state {
            COUNTRY = 3336969605,
            COUNTRY_NORIDING = 3288159938,
            FOREST = 491961918,
            NONE = 748895195,
        }
    }

    pub const GROUPS: &[GroupDef] = &[musicstate::def(), region::def()];
}

/// Switch groups
pub mod switches {
    use crate::table::GroupDef;

    id_group! {
        SWITCH_FOOTSTEPTYPE => switch_footsteptype = 3294598210,
        switch {
            JUMP = 3833651337,
            LAND = 674522502,
            RUN = 712161704,
            WALK = 2108779966,
        }
    }

    pub const GROUPS: &[GroupDef] = &[switch_footsteptype::def()];
}

id_list! {
    /// Game parameter IDs
    pub mod game_parameters {
        COAST = 2482423965,
        RTPC_COWSAGGRAVATED = 2279626901,
        RTPC_DISTANCE = 262290038,
        RTPC_INTENSITY = 2582146478,
        RTPC_POINTCOUNT = 1832797912,
        SPEED = 640949982,
        SS_AIR_FEAR = 1351367891,
        SS_AIR_FREEFALL = 3002758120,
        SS_AIR_FURY = 1029930033,
        SS_AIR_MONTH = 2648548617,
        SS_AIR_PRESENCE = 3847924954,
        SS_AIR_RPM = 822163944,
        SS_AIR_SIZE = 3074696722,
        SS_AIR_STORM = 3715662592,
        SS_AIR_TIMEOFDAY = 3203397129,
        SS_AIR_TURBULENCE = 4160247818,
    }
}

id_list! {
    /// Bus IDs
    pub mod busses {
        MASTER_AUDIO_BUS = 3803692087,
        MUS = 712897226,
        SFX = 393239870,
        VO = 1534528548,
    }
}

id_list! {
    /// Audio device IDs
    pub mod audio_devices {
        NO_OUTPUT = 2317455096,
        SYSTEM = 3859886410,
    }
}

/// The complete table, for runtime iteration
pub const TABLE: IdTable = IdTable {
    events: events::entries(),
    state_groups: states::GROUPS,
    switch_groups: switches::GROUPS,
    game_parameters: game_parameters::entries(),
    busses: busses::entries(),
    audio_devices: audio_devices::entries(),
};
