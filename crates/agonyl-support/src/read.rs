use std::io::{ErrorKind, Read, Result};

/// Read exactly `N` bytes into a fixed-size array.
///
/// ## Example
///
/// ```rust
/// use agonyl_support::read_array;
///
/// let mut input = std::io::Cursor::new(vec![1u8, 2, 3, 4, 5]);
/// let bytes: [u8; 4] = read_array(&mut input).unwrap();
/// assert_eq!(bytes, [1, 2, 3, 4]);
/// ```
pub fn read_array<R: Read, const N: usize>(input: &mut R) -> Result<[u8; N]> {
    let mut bytes = [0; N];
    input.read_exact(&mut bytes)?;
    Ok(bytes)
}

/// Check whether the input has reached the end of its data.
///
/// Tries to read a single byte. Returns `Ok(true)` when the stream is cleanly exhausted, and
/// `Ok(false)` when a byte was available (that byte is consumed). I/O errors other than
/// `Interrupted` are returned as-is.
///
/// ## Example
///
/// ```rust
/// use agonyl_support::at_end;
///
/// let mut empty = std::io::Cursor::new(Vec::<u8>::new());
/// let mut one = std::io::Cursor::new(vec![0x00u8]);
///
/// assert!(at_end(&mut empty).unwrap());
/// assert!(!at_end(&mut one).unwrap());
/// ```
pub fn at_end<R: Read>(input: &mut R) -> Result<bool> {
    let mut probe = [0; 1];
    loop {
        match input.read(&mut probe) {
            Ok(0) => return Ok(true),
            Ok(_) => return Ok(false),
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    struct Flaky {
        interrupts: usize,
        data: Cursor<Vec<u8>>,
    }

    impl Read for Flaky {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.interrupts > 0 {
                self.interrupts -= 1;
                return Err(io::Error::from(ErrorKind::Interrupted));
            }
            self.data.read(buf)
        }
    }

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::from(ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn at_end_retries_interrupted() -> anyhow::Result<()> {
        let mut input = Flaky {
            interrupts: 3,
            data: Cursor::new(vec![]),
        };
        assert!(at_end(&mut input)?);

        let mut input = Flaky {
            interrupts: 1,
            data: Cursor::new(vec![9]),
        };
        assert!(!at_end(&mut input)?);
        Ok(())
    }

    #[test]
    fn at_end_reports_faults() {
        let err = at_end(&mut Broken).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BrokenPipe);
    }

    #[test]
    fn short_array_read_is_eof() {
        let mut input = Cursor::new(vec![1u8, 2]);
        let err = read_array::<_, 4>(&mut input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
    }
}
