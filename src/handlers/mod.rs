pub mod citas;
