// Game-side systems: the avatar and its animation rig

pub mod avatar;
pub mod rig;
