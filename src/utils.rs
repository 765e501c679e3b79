#[cfg(feature = "python-bindings")]
use ndarray::Array1;

#[cfg(feature = "python-bindings")]
use pyo3::{
    exceptions::{PyTypeError, PyValueError},
    prelude::*,
    types::{PyAny, PyDict},
};

#[cfg(feature = "python-bindings")]
use crate::{
    imaging::ImageData,
    statistics::{DataSource, DataTable},
};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1, PyReadonlyArray2, PyReadonlyArray3,
};

#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err(
            "expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64",
        )
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

#[cfg(feature = "python-bindings")]
pub fn extract_data_source<'py>(
    py: Python<'py>, data: &Bound<'py, PyAny>, column: Option<&str>,
) -> PyResult<DataSource> {
    // Dict of columns → labeled table; a column selector is mandatory.
    if let Ok(dict) = data.downcast::<PyDict>() {
        let column = column.ok_or_else(|| {
            PyValueError::new_err("column must be specified when data is a dict of columns")
        })?;

        let mut table = DataTable::new();
        for (key, value) in dict.iter() {
            let name: String = key
                .extract()
                .map_err(|_| PyTypeError::new_err("column names must be strings"))?;
            let arr = extract_f64_array(py, &value)?;
            let slice = arr.as_slice().map_err(|_| {
                PyValueError::new_err(format!(
                    "column {name:?} must be a 1-D contiguous float64 array or sequence"
                ))
            })?;
            table = table.with_column(name, Array1::from(slice.to_vec()))?;
        }

        return Ok(DataSource::table(table, column));
    }

    let arr = extract_f64_array(py, data)?;
    let slice = arr.as_slice().map_err(|_| {
        PyValueError::new_err("data must be a 1-D contiguous float64 array or sequence")
    })?;
    Ok(DataSource::Flat(Array1::from(slice.to_vec())))
}

#[cfg(feature = "python-bindings")]
pub fn extract_image<'py>(image: &Bound<'py, PyAny>) -> PyResult<ImageData> {
    if let Ok(plane) = image.extract::<PyReadonlyArray2<f64>>() {
        return Ok(ImageData::Gray(plane.as_array().to_owned()));
    }

    if let Ok(cube) = image.extract::<PyReadonlyArray3<f64>>() {
        return Ok(ImageData::Rgb(cube.as_array().to_owned()));
    }

    Err(PyTypeError::new_err(
        "expected a 2-D (grayscale) or 3-D channel-last (RGB) float64 numpy.ndarray",
    ))
}
