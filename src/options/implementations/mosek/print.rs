use super::*;
use crate::algebra::*;
use crate::io::ConfigurablePrintTarget;
use crate::options::core::{
    traits::{OptionsPrint, Settings},
    ParameterMapping,
};
use std::io::Write;

impl<T, S, H> ConfigurablePrintTarget for MosekOptionsResolver<T, S, H>
where
    T: FloatT,
{
    fn print_to_stdout(&mut self) {
        self.stream.print_to_stdout()
    }
    fn print_to_file(&mut self, file: std::fs::File) {
        self.stream.print_to_file(file)
    }
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.stream.print_to_stream(stream)
    }
    fn print_to_sink(&mut self) {
        self.stream.print_to_sink()
    }
    fn print_to_buffer(&mut self) {
        self.stream.print_to_buffer()
    }
    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.stream.get_print_buffer()
    }
}

impl<T, S, H> OptionsPrint<T> for MosekOptionsResolver<T, S, H>
where
    T: FloatT,
{
    fn print_options(&mut self, params: &ParameterMapping<T>) -> std::io::Result<()> {
        if !self.settings.verbose() {
            return std::io::Result::Ok(());
        }

        let out = &mut self.stream;

        writeln!(out, "MOSEK options ({} set):", params.len())?;
        writeln!(out, "--------------------------------------------------")?;
        for (name, value) in params.sorted() {
            writeln!(out, "  {:<34} = {}", name, value)?;
        }
        writeln!(out,)?;
        out.flush()?;

        std::io::Result::Ok(())
    }
}
