pub mod classify;

mod geometry_to_mesh;
mod list_patches;

pub use geometry_to_mesh::{GeometryToMesh, MeshSummary};
pub use list_patches::ListPatches;
