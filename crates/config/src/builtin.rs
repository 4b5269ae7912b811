use crate::{
    CatalogConfig, LaunchVehicleConfig, MaterialConfig, PropulsionConfig, TrajectoryConfig,
};

pub(crate) fn catalog() -> CatalogConfig {
    CatalogConfig {
        launch_vehicles: vec![
            LaunchVehicleConfig {
                key: "falcon_heavy".into(),
                name: "Falcon Heavy".into(),
                cost_b: 0.15,
                max_payload_kg: 26_700.0,
                construction_time_days: 20.0,
                reliability: 0.98,
                escape_burn_hours: 12.0,
            },
            LaunchVehicleConfig {
                key: "sls_block1".into(),
                name: "SLS Block 1".into(),
                cost_b: 2.0,
                max_payload_kg: 95_000.0,
                construction_time_days: 40.0,
                reliability: 0.92,
                escape_burn_hours: 4.0,
            },
        ],
        propulsion: vec![
            PropulsionConfig {
                key: "hypergolic".into(),
                name: "Hypergolic Bipropellant".into(),
                cost_b: 0.05,
                mass_kg: 500.0,
                specific_impulse_s: 320.0,
                construction_time_days: 5.0,
                reliability: 0.99,
            },
            PropulsionConfig {
                key: "electric".into(),
                name: "Ion Drive (NEXT-C)".into(),
                cost_b: 0.1,
                mass_kg: 800.0,
                specific_impulse_s: 4_100.0,
                construction_time_days: 10.0,
                reliability: 0.95,
            },
        ],
        materials: vec![
            MaterialConfig {
                key: "aluminum".into(),
                name: "Aluminum".into(),
                density_kg_m3: 2_700.0,
                momentum_transfer_beta: 1.2,
                max_mass_kg: 5_000,
                description: "Low density, standard momentum transfer.".into(),
            },
            MaterialConfig {
                key: "tungsten".into(),
                name: "Tungsten".into(),
                density_kg_m3: 19_300.0,
                momentum_transfer_beta: 2.5,
                max_mass_kg: 20_000,
                description: "High density, high momentum transfer (Beta: 2.5).".into(),
            },
        ],
        trajectories: vec![
            TrajectoryConfig {
                key: "fast".into(),
                label: Some("Fast Intercept".into()),
                travel_time_days: 30,
                required_delta_v_m_s: 8_000.0,
            },
            TrajectoryConfig {
                key: "balanced".into(),
                label: Some("Balanced Transfer".into()),
                travel_time_days: 45,
                required_delta_v_m_s: 5_000.0,
            },
            TrajectoryConfig {
                key: "efficient".into(),
                label: Some("Low-Energy Transfer".into()),
                travel_time_days: 60,
                required_delta_v_m_s: 3_000.0,
            },
        ],
    }
}
