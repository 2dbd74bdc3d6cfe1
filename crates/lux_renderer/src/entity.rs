//! Closed set of scene entities.

use crate::{
    hittable::{HitRecord, Hittable},
    Material, MeshObject, Plane, Ray, Sphere, Triangle,
};

/// Anything that can be placed in a scene.
///
/// Using an enum keeps dispatch static and the set of entity kinds fixed.
#[derive(Debug, Clone)]
pub enum Entity {
    Sphere(Sphere),
    Plane(Plane),
    Triangle(Triangle),
    Mesh(MeshObject),
}

impl Hittable for Entity {
    fn intersect(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        match self {
            Entity::Sphere(s) => s.intersect(ray),
            Entity::Plane(p) => p.intersect(ray),
            Entity::Triangle(t) => t.intersect(ray),
            Entity::Mesh(m) => m.intersect(ray),
        }
    }

    fn material(&self) -> &Material {
        match self {
            Entity::Sphere(s) => s.material(),
            Entity::Plane(p) => p.material(),
            Entity::Triangle(t) => t.material(),
            Entity::Mesh(m) => m.material(),
        }
    }
}

impl From<Sphere> for Entity {
    fn from(s: Sphere) -> Self {
        Entity::Sphere(s)
    }
}

impl From<Plane> for Entity {
    fn from(p: Plane) -> Self {
        Entity::Plane(p)
    }
}

impl From<Triangle> for Entity {
    fn from(t: Triangle) -> Self {
        Entity::Triangle(t)
    }
}

impl From<MeshObject> for Entity {
    fn from(m: MeshObject) -> Self {
        Entity::Mesh(m)
    }
}
