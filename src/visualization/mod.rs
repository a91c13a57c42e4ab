pub mod bouncesim_vis2d;
