use crate::{
    algebra::*,
    options::core::{traits::ParamsJSONReadWrite, ParamValue, ParameterMapping},
};

use serde::{de::DeserializeOwned, Serialize};
use std::io::Write;
use std::{fs::File, io, io::Read};

impl<T> ParamsJSONReadWrite for ParameterMapping<T>
where
    T: FloatT + DeserializeOwned + Serialize,
{
    fn write_to_file(&self, file: &mut File) -> Result<(), io::Error> {
        let mut params = self.clone();

        // sanitize values that can't be serialized, i.e. infs
        sanitize_params(&mut params);

        let json = serde_json::to_string(&params)?;
        file.write_all(json.as_bytes())?;

        Ok(())
    }

    fn read_from_file(file: &mut File) -> Result<Self, io::Error> {
        let mut buffer = String::new();
        file.read_to_string(&mut buffer)?;
        let mut params: ParameterMapping<T> = serde_json::from_str(&buffer)?;

        // restore sanitized values to their (likely) original values
        desanitize_params(&mut params);

        Ok(params)
    }
}

fn sanitize_params<T: FloatT>(params: &mut ParameterMapping<T>) {
    for value in params.values_mut() {
        if let ParamValue::Float(v) = value {
            if *v == T::infinity() {
                *v = T::max_value();
            } else if *v == T::neg_infinity() {
                *v = T::min_value();
            }
        }
    }
}

fn desanitize_params<T: FloatT>(params: &mut ParameterMapping<T>) {
    for value in params.values_mut() {
        if let ParamValue::Float(v) = value {
            if *v == T::max_value() {
                *v = T::infinity();
            } else if *v == T::min_value() {
                *v = T::neg_infinity();
            }
        }
    }
}

#[test]
fn test_json_io() {
    use std::io::{Seek, SeekFrom};

    let mut params = ParameterMapping::<f64>::new();
    params.set("MSK_IPAR_OPTIMIZER", 1);
    params.set_float("MSK_DPAR_INTPNT_TOL_PFEAS", 1e-8);
    params.set_float("MSK_DPAR_OPTIMIZER_MAX_TIME", f64::INFINITY);
    params.set("MSK_SPAR_PARAM_WRITE_FILE_NAME", "mosek.par");

    let mut file = tempfile::tempfile().unwrap();
    params.write_to_file(&mut file).unwrap();

    file.seek(SeekFrom::Start(0)).unwrap();
    let params2 = ParameterMapping::<f64>::read_from_file(&mut file).unwrap();

    assert_eq!(params, params2);
    assert_eq!(
        params2.get("MSK_IPAR_OPTIMIZER"),
        Some(&ParamValue::Int(1))
    );
}
