use std::f32::consts::FRAC_PI_4;

use glam::{Vec2, Vec3, vec2, vec3};

use crate::{
    constants::{CONTACT_EPSILON, WALL_HALF_SIZE},
    maze::Layout,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Movement {
    pub delta: Vec2,
    pub is_colliding: bool,
}

/// Overlap between the player's square collider and a wall square, seen from
/// above (`x` across, `y` standing for world `z`).
///
/// Returns the penetration along whichever axis separates the two more
/// directly, pointing from the player towards the wall, or `None` if they
/// don't touch.
pub fn generate_contact(
    player: Vec2,
    player_half_size: f32,
    square: Vec2,
    square_half_size: f32,
) -> Option<Vec3> {
    let offset = square - player;
    let diff = offset.abs();
    let reach = player_half_size + square_half_size;

    if diff.x > reach || diff.y > reach {
        return None;
    }

    if diff.y.atan2(diff.x) <= FRAC_PI_4 {
        Some(vec3(sign(offset.x) * (reach - diff.x), 0.0, 0.0))
    } else {
        Some(vec3(0.0, 0.0, sign(offset.y) * (reach - diff.y)))
    }
}

/// Corrects a ground-plane step so the player doesn't sink into the walls
/// around where it would land.
pub fn resolve_movement(
    layout: &Layout,
    position: Vec2,
    delta: Vec2,
    player_half_size: f32,
) -> Movement {
    let projected = position + delta;
    let col = projected.x.round() as isize;
    let row = projected.y.round() as isize;

    let mut max_contact = Vec2::ZERO;
    let mut is_colliding = false;

    for z in row - 1..=row + 1 {
        for x in col - 1..=col + 1 {
            if x < 0 || z < 0 || !layout.is_wall(z as usize, x as usize) {
                continue;
            }

            let contact = generate_contact(
                projected,
                player_half_size,
                vec2(x as f32, z as f32),
                WALL_HALF_SIZE,
            );
            let Some(contact) = contact.filter(|c| c.length() > CONTACT_EPSILON) else {
                continue;
            };

            is_colliding = true;
            if contact.x.abs() > max_contact.x.abs() {
                max_contact.x = contact.x;
            }
            if contact.z.abs() > max_contact.y.abs() {
                max_contact.y = contact.z;
            }
        }
    }

    Movement {
        delta: delta - max_contact,
        is_colliding,
    }
}

// Zero stays zero, unlike `f32::signum`.
fn sign(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}
