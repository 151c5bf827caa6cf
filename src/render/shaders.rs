use gl::types::*;
use glam::{Mat4, Vec3};
use std::collections::HashMap;
use std::ffi::{CString, NulError};
use std::fs;
use std::path::{Path, PathBuf};
use std::ptr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("Cannot read shader {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Null byte error: {0}")]
    Nul(#[from] NulError),
    #[error("Shader compilation failed ({stage}): {log}")]
    Compilation { stage: &'static str, log: String },
    #[error("Program linking failed: {0}")]
    Linking(String),
}

/// Linked vertex + fragment program with a uniform location cache.
pub struct ShaderProgram {
    id: GLuint,
    uniforms: HashMap<String, GLint>,
}

impl ShaderProgram {
    pub fn from_files<P: AsRef<Path>>(vertex_path: P, fragment_path: P) -> Result<Self, ShaderError> {
        let vertex_source = read_source(vertex_path.as_ref())?;
        let fragment_source = read_source(fragment_path.as_ref())?;
        Self::from_sources(&vertex_source, &fragment_source)
    }

    pub fn from_sources(vertex_source: &str, fragment_source: &str) -> Result<Self, ShaderError> {
        let vertex_shader = compile_shader(vertex_source, gl::VERTEX_SHADER)?;
        let fragment_shader = match compile_shader(fragment_source, gl::FRAGMENT_SHADER) {
            Ok(shader) => shader,
            Err(e) => {
                unsafe { gl::DeleteShader(vertex_shader) };
                return Err(e);
            }
        };

        let program = unsafe { gl::CreateProgram() };
        let mut success = 1;
        unsafe {
            gl::AttachShader(program, vertex_shader);
            gl::AttachShader(program, fragment_shader);
            gl::LinkProgram(program);
            gl::DetachShader(program, vertex_shader);
            gl::DetachShader(program, fragment_shader);
            gl::DeleteShader(vertex_shader);
            gl::DeleteShader(fragment_shader);
            gl::GetProgramiv(program, gl::LINK_STATUS, &mut success);
        }

        if success == 0 {
            let log = program_info_log(program);
            unsafe { gl::DeleteProgram(program) };
            return Err(ShaderError::Linking(log));
        }

        Ok(ShaderProgram {
            id: program,
            uniforms: HashMap::new(),
        })
    }

    pub fn id(&self) -> GLuint {
        self.id
    }

    pub fn set_used(&self) {
        unsafe {
            gl::UseProgram(self.id);
        }
    }

    pub fn uniform_location(&mut self, name: &str) -> GLint {
        if let Some(location) = self.uniforms.get(name) {
            return *location;
        }

        let location = match CString::new(name) {
            Ok(cname) => unsafe { gl::GetUniformLocation(self.id, cname.as_ptr()) },
            Err(_) => -1,
        };
        if location == -1 {
            log::warn!("Uniform '{}' not found in shader", name);
        }

        self.uniforms.insert(name.to_string(), location);
        location
    }

    /// Expects the program to be in use.
    pub fn set_mat4(&mut self, name: &str, mat: &Mat4) {
        let location = self.uniform_location(name);
        unsafe {
            gl::UniformMatrix4fv(location, 1, gl::FALSE, mat.to_cols_array().as_ptr());
        }
    }

    /// Expects the program to be in use.
    pub fn set_vec3(&mut self, name: &str, vec: Vec3) {
        let location = self.uniform_location(name);
        unsafe {
            gl::Uniform3f(location, vec.x, vec.y, vec.z);
        }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteProgram(self.id);
        }
    }
}

fn read_source(path: &Path) -> Result<String, ShaderError> {
    fs::read_to_string(path).map_err(|source| ShaderError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn stage_name(shader_type: GLenum) -> &'static str {
    match shader_type {
        gl::VERTEX_SHADER => "vertex",
        gl::FRAGMENT_SHADER => "fragment",
        _ => "unknown",
    }
}

fn compile_shader(source: &str, shader_type: GLenum) -> Result<GLuint, ShaderError> {
    let source = CString::new(source.as_bytes())?;
    let shader = unsafe { gl::CreateShader(shader_type) };

    let mut success = 1;
    unsafe {
        gl::ShaderSource(shader, 1, &source.as_ptr(), ptr::null());
        gl::CompileShader(shader);
        gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut success);
    }

    if success == 0 {
        let log = shader_info_log(shader);
        unsafe { gl::DeleteShader(shader) };
        return Err(ShaderError::Compilation {
            stage: stage_name(shader_type),
            log,
        });
    }

    Ok(shader)
}

fn shader_info_log(shader: GLuint) -> String {
    let mut len = 0;
    unsafe { gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len) };
    let mut buffer = vec![0u8; len.max(1) as usize];
    unsafe {
        gl::GetShaderInfoLog(shader, len, ptr::null_mut(), buffer.as_mut_ptr() as *mut GLchar);
    }
    info_log_to_string(buffer)
}

fn program_info_log(program: GLuint) -> String {
    let mut len = 0;
    unsafe { gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut len) };
    let mut buffer = vec![0u8; len.max(1) as usize];
    unsafe {
        gl::GetProgramInfoLog(program, len, ptr::null_mut(), buffer.as_mut_ptr() as *mut GLchar);
    }
    info_log_to_string(buffer)
}

fn info_log_to_string(mut buffer: Vec<u8>) -> String {
    if let Some(end) = buffer.iter().position(|b| *b == 0) {
        buffer.truncate(end);
    }
    String::from_utf8_lossy(&buffer).trim_end().to_string()
}
