mod job;
mod overlay;
mod shading;
