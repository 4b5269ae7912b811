use deflect_planner::format::group_thousands;
use deflect_planner::mission::{Assessment, Catalog, DesignSession, MissionState};
use serde::Serialize;

/// JSON view of one assessment together with the choices that produced it.
#[derive(Serialize)]
pub(super) struct Report<'a> {
    vehicle: &'a str,
    propulsion: &'a str,
    material: &'a str,
    impactor_mass_kg: u32,
    trajectory_key: Option<&'a str>,
    #[serde(flatten)]
    mission: &'a MissionState,
    time_to_impact: String,
    status: String,
    #[serde(flatten)]
    assessment: &'a Assessment,
}

impl<'a> Report<'a> {
    pub(super) fn new(session: &'a DesignSession, assessment: &'a Assessment) -> Self {
        let inputs = session.inputs();
        Self {
            vehicle: &inputs.vehicle.key,
            propulsion: &inputs.propulsion.key,
            material: &inputs.material.key,
            impactor_mass_kg: inputs.impactor_mass_kg,
            trajectory_key: inputs.trajectory.map(|t| t.key.as_str()),
            mission: session.mission(),
            time_to_impact: session.clock().countdown(),
            status: assessment.status().to_string(),
            assessment,
        }
    }
}

pub(super) fn print(session: &DesignSession, a: &Assessment) {
    let inputs = session.inputs();
    println!("=== Mitigation Design ===");
    println!(
        "Vehicle        : {} ({})",
        inputs.vehicle.name,
        inputs.vehicle.spec()
    );
    println!(
        "Propulsion     : {} ({})",
        inputs.propulsion.name,
        inputs.propulsion.spec()
    );
    println!(
        "Impactor       : {}, {} kg ({})",
        inputs.material.name,
        group_thousands(f64::from(inputs.impactor_mass_kg)),
        inputs.material.spec()
    );
    match inputs.trajectory {
        Some(t) => println!(
            "Trajectory     : {} ({} days, {} m/s required)",
            t.label,
            t.travel_time_days,
            group_thousands(t.required_delta_v_m_s)
        ),
        None => println!("Trajectory     : none selected"),
    }
    println!("Budget         : ${:.2} B remaining", a.remaining_budget_b);
    println!(
        "Mass           : {} / {} kg{}",
        group_thousands(a.spacecraft_dry_mass_kg),
        group_thousands(a.max_payload_kg),
        if a.is_overweight { " (overweight)" } else { "" }
    );
    println!(
        "Delta-v        : {} m/s (exhaust {} m/s)",
        group_thousands(a.delta_v_m_s),
        group_thousands(a.exhaust_velocity_m_s)
    );
    println!("Prep time      : {} days", a.total_prep_days);
    println!(
        "Reliability    : {:.1} % ({})",
        a.total_reliability * 100.0,
        a.reliability_tier
    );
    println!("Escape burn    : {} hours", a.escape_burn_hours);
    if let Some(t) = a.trajectory {
        println!(
            "Mission time   : {} days of {:.1} remaining",
            t.total_mission_days, a.remaining_days_to_impact
        );
    }
    println!("Time to impact : {}", session.clock().countdown());
    println!("Status         : {}", a.status());
}

pub(super) fn print_catalog(catalog: &Catalog) {
    println!("Launch vehicles:");
    for v in &catalog.launch_vehicles {
        println!("  {:<14} {:<26} {}", v.key, v.name, v.spec());
    }
    println!("Propulsion systems:");
    for p in &catalog.propulsion {
        println!("  {:<14} {:<26} {}", p.key, p.name, p.spec());
    }
    println!("Impactor materials:");
    for m in &catalog.materials {
        println!(
            "  {:<14} {:<26} max {} kg. {}",
            m.key,
            m.name,
            group_thousands(f64::from(m.max_mass_kg)),
            m.spec()
        );
    }
    println!("Trajectory options:");
    for t in &catalog.trajectories {
        println!(
            "  {:<14} {:<26} {} days, {} m/s",
            t.key,
            t.label,
            t.travel_time_days,
            group_thousands(t.required_delta_v_m_s)
        );
    }
}
