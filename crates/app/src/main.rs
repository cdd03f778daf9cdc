//! Entry point for the maze loader demo.
//! Loads a flat model and/or a grouped maze file, builds the collision
//! world, and answers an optional agent overlap query.

use anyhow::{Result, bail};
use collision::CollisionWorld;
use corelib::{Vec3, shape::CollisionShape, vec3};

fn parse_path_arg(prefix: &str) -> Option<String> {
    for arg in std::env::args() {
        if let Some(val) = arg.strip_prefix(prefix) {
            return Some(val.to_string());
        }
    }
    None
}

fn parse_indexed_arg() -> bool {
    // --indexed[=on|off], default off (duplicate-expanded buffer)
    for arg in std::env::args() {
        if arg == "--indexed" {
            return true;
        }
        if let Some(val) = arg.strip_prefix("--indexed=") {
            return matches!(
                val.to_ascii_lowercase().as_str(),
                "1" | "true" | "on" | "yes"
            );
        }
    }
    false
}

fn parse_agent_arg() -> Option<Vec3> {
    for arg in std::env::args() {
        if let Some(val) = arg.strip_prefix("--agent=") {
            let mut parts = val.split(',').map(|token| token.parse::<f32>());
            if let (Some(Ok(x)), Some(Ok(y)), Some(Ok(z))) =
                (parts.next(), parts.next(), parts.next())
            {
                return Some(vec3(x, y, z));
            }
            eprintln!("[warn] Bad --agent value '{}', expected X,Y,Z.", val);
        }
    }
    None
}

fn parse_agent_size_arg() -> f32 {
    // Half extent of the agent's box; default is a unit box.
    for arg in std::env::args() {
        if let Some(val) = arg.strip_prefix("--agent-size=") {
            match val.parse::<f32>() {
                Ok(size) if size > 0.0 => return size,
                _ => eprintln!("[warn] Bad --agent-size value '{}', using 1.", val),
            }
        }
    }
    1.0
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let model_path = parse_path_arg("--model=");
    let maze_path = parse_path_arg("--maze=");
    if model_path.is_none() && maze_path.is_none() {
        bail!(
            "Usage: app --model=PATH [--indexed[=on|off]] \
             --maze=PATH [--agent=X,Y,Z] [--agent-size=S]"
        );
    }

    if let Some(path) = model_path {
        let indexed = parse_indexed_arg();
        // Indexed drawing wants the deduplicated buffer; non-indexed wants
        // one record per face corner.
        let model = asset::model::load_model(&path, !indexed)?;
        log::info!(
            "Loaded model {}: {} vertex records, {} indices, {} draw mode",
            path,
            model.vertex_count(),
            model.indices.len(),
            if indexed { "indexed" } else { "non-indexed" },
        );
    }

    if let Some(path) = maze_path {
        let groups = asset::groups::load_groups(&path);
        if groups.is_empty() {
            bail!("No mesh groups in {path}");
        }
        let world = CollisionWorld::from_groups(&groups);
        log::info!(
            "Built collision world: {} walls from {} groups",
            world.len(),
            groups.len()
        );
        for collider in world.colliders() {
            log::info!(
                "  {}: {} triangles, bounds {} .. {}",
                collider.name,
                collider.triangles.len(),
                collider.aabb.min,
                collider.aabb.max,
            );
        }

        if let Some(position) = parse_agent_arg() {
            let half = parse_agent_size_arg();
            let shape = CollisionShape::Box {
                half_extents: Vec3::splat(half),
            };
            let probe = shape.aabb_at(position);
            let hits = world.hits(&probe);
            if hits.is_empty() {
                log::info!("Agent at {position} is clear of the walls");
            } else {
                for hit in &hits {
                    log::info!("Agent at {position} overlaps '{}'", hit.name);
                }
            }
        }
    }

    log::info!("Done.");
    Ok(())
}
