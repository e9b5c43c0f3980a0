pub mod gpu_tweak;
