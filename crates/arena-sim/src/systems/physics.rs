//! Rigid sphere physics.
//!
//! Just enough to push balls around a floating island: force application,
//! gravity, linear drag, island support, sphere-sphere contact response and
//! enter-only contact reporting for bodies, triggers and kinematic colliders.

use std::collections::HashSet;

use glam::Vec3;
use hecs::{Entity, World};

use arena_core::components::{KinematicCollider, RigidBody, Transform, TriggerVolume};
use arena_core::constants::{BOUNCINESS, GRAVITY, PLATFORM_RADIUS};
use arena_core::enums::ForceMode;
use arena_core::types::horizontal_radius;

/// How far below its resting height a body may be and still be caught by the island.
const SUPPORT_TOLERANCE: f32 = 0.25;

/// Apply a force to a body in the given mode.
pub fn apply_force(body: &mut RigidBody, force: Vec3, mode: ForceMode, dt: f32) {
    match mode {
        ForceMode::Force => body.velocity += force / body.mass * dt,
        ForceMode::Impulse => body.velocity += force / body.mass,
        ForceMode::VelocityChange => body.velocity += force,
    }
}

/// Apply a force to an entity's body, if it still has one.
pub fn apply_force_to(world: &World, entity: Entity, force: Vec3, mode: ForceMode, dt: f32) {
    if let Ok(mut body) = world.get::<&mut RigidBody>(entity) {
        apply_force(&mut body, force, mode, dt);
    }
}

/// Integrate every rigid body: gravity, drag, motion, then island support.
pub fn integrate(world: &mut World, dt: f32) {
    for (_entity, (transform, body)) in world.query_mut::<(&mut Transform, &mut RigidBody)>() {
        body.velocity.y -= GRAVITY * dt;
        body.velocity /= 1.0 + body.drag * dt;

        let previous_y = transform.position.y;
        transform.position += body.velocity * dt;

        let resting_y = body.radius;
        let over_island = horizontal_radius(transform.position) <= PLATFORM_RADIUS;
        if over_island
            && transform.position.y < resting_y
            && previous_y >= resting_y - SUPPORT_TOLERANCE
        {
            transform.position.y = resting_y;
            body.velocity.y = body.velocity.y.max(0.0);
        }

        // Roll without slipping.
        let ground_velocity = Vec3::new(body.velocity.x, 0.0, body.velocity.z);
        body.angular_velocity = Vec3::Y.cross(ground_velocity) / body.radius;
    }
}

/// A pair that started touching this tick. `normal` points from `a` to `b`.
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    pub a: Entity,
    pub b: Entity,
    pub normal: Vec3,
    /// True when one side is a trigger volume (overlap only, no response).
    pub trigger: bool,
}

/// Pairs touching at the end of the previous contact pass.
#[derive(Debug, Default)]
pub struct ContactTracker {
    touching: HashSet<(Entity, Entity)>,
}

impl ContactTracker {
    pub fn clear(&mut self) {
        self.touching.clear();
    }

    pub fn is_touching(&self, a: Entity, b: Entity) -> bool {
        self.touching.contains(&pair_key(a, b))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Shape {
    Dynamic { mass: f32, velocity: Vec3 },
    Trigger,
    Kinematic,
}

#[derive(Debug, Clone, Copy)]
struct Proxy {
    entity: Entity,
    position: Vec3,
    radius: f32,
    shape: Shape,
}

fn pair_key(a: Entity, b: Entity) -> (Entity, Entity) {
    if a.to_bits() <= b.to_bits() {
        (a, b)
    } else {
        (b, a)
    }
}

/// Separate overlapping bodies, bounce them apart, and report new contacts.
///
/// Contacts come back in a stable order (world query order), so the pass is
/// deterministic for a given world.
pub fn resolve_contacts(world: &mut World, tracker: &mut ContactTracker) -> Vec<Contact> {
    let mut proxies = gather_proxies(world);
    let mut touching = HashSet::new();
    let mut entered = Vec::new();

    for j in 1..proxies.len() {
        for i in 0..j {
            let (left, right) = proxies.split_at_mut(j);
            let a = &mut left[i];
            let b = &mut right[0];

            let trigger = match (a.shape, b.shape) {
                (Shape::Dynamic { .. }, Shape::Dynamic { .. }) => false,
                (Shape::Dynamic { .. }, _) | (_, Shape::Dynamic { .. }) => {
                    a.shape == Shape::Trigger || b.shape == Shape::Trigger
                }
                _ => continue,
            };

            let offset = b.position - a.position;
            let distance = offset.length();
            let reach = a.radius + b.radius;
            if distance >= reach {
                continue;
            }
            let normal = if distance > f32::EPSILON {
                offset / distance
            } else {
                Vec3::X
            };

            separate(a, b, normal, reach - distance);

            let key = pair_key(a.entity, b.entity);
            if touching.insert(key) && !tracker.touching.contains(&key) {
                entered.push(Contact {
                    a: a.entity,
                    b: b.entity,
                    normal,
                    trigger,
                });
            }
        }
    }

    for proxy in &proxies {
        if let Shape::Dynamic { velocity, .. } = proxy.shape {
            if let Ok(mut transform) = world.get::<&mut Transform>(proxy.entity) {
                transform.position = proxy.position;
            }
            if let Ok(mut body) = world.get::<&mut RigidBody>(proxy.entity) {
                body.velocity = velocity;
            }
        }
    }

    tracker.touching = touching;
    entered
}

fn gather_proxies(world: &World) -> Vec<Proxy> {
    let mut proxies = Vec::new();

    for (entity, (transform, body)) in world.query::<(&Transform, &RigidBody)>().iter() {
        proxies.push(Proxy {
            entity,
            position: transform.position,
            radius: body.radius,
            shape: Shape::Dynamic {
                mass: body.mass,
                velocity: body.velocity,
            },
        });
    }
    for (entity, (transform, volume)) in world.query::<(&Transform, &TriggerVolume)>().iter() {
        proxies.push(Proxy {
            entity,
            position: transform.position,
            radius: volume.radius,
            shape: Shape::Trigger,
        });
    }
    for (entity, (transform, collider)) in world.query::<(&Transform, &KinematicCollider)>().iter()
    {
        proxies.push(Proxy {
            entity,
            position: transform.position,
            radius: collider.radius,
            shape: Shape::Kinematic,
        });
    }

    proxies
}

/// Push two dynamic spheres apart and exchange a restitution impulse.
/// Does nothing unless both sides are dynamic.
fn separate(a: &mut Proxy, b: &mut Proxy, normal: Vec3, depth: f32) {
    let (
        Shape::Dynamic {
            mass: mass_a,
            velocity: velocity_a,
        },
        Shape::Dynamic {
            mass: mass_b,
            velocity: velocity_b,
        },
    ) = (a.shape, b.shape)
    else {
        return;
    };

    let inv_a = 1.0 / mass_a;
    let inv_b = 1.0 / mass_b;
    let inv_sum = inv_a + inv_b;

    let correction = normal * (depth / inv_sum);
    a.position -= correction * inv_a;
    b.position += correction * inv_b;

    let closing = (velocity_b - velocity_a).dot(normal);
    if closing >= 0.0 {
        return;
    }
    let impulse = -(1.0 + BOUNCINESS) * closing / inv_sum;
    a.shape = Shape::Dynamic {
        mass: mass_a,
        velocity: velocity_a - normal * impulse * inv_a,
    };
    b.shape = Shape::Dynamic {
        mass: mass_b,
        velocity: velocity_b + normal * impulse * inv_b,
    };
}

/// Zero linear and angular velocity of every body.
pub fn freeze_bodies(world: &mut World) {
    for (_entity, body) in world.query_mut::<&mut RigidBody>() {
        body.velocity = Vec3::ZERO;
        body.angular_velocity = Vec3::ZERO;
    }
}
