use std::io::{self, Cursor, Read};

pub fn read_u8(cursor: &mut Cursor<&[u8]>) -> io::Result<u8> {
    let mut buf = [0u8; 1];
    cursor.read_exact(&mut buf)?;
    Ok(buf[0])
}

pub fn read_u16_le(cursor: &mut Cursor<&[u8]>) -> io::Result<u16> {
    let mut buf = [0u8; 2];
    cursor.read_exact(&mut buf)?;
    Ok(u16::from_le_bytes(buf))
}

pub fn read_i32_le(cursor: &mut Cursor<&[u8]>) -> io::Result<i32> {
    let mut buf = [0u8; 4];
    cursor.read_exact(&mut buf)?;
    Ok(i32::from_le_bytes(buf))
}

pub fn read_bytes(cursor: &mut Cursor<&[u8]>, length: usize) -> io::Result<Vec<u8>> {
    let mut buffer = vec![0u8; length];
    cursor.read_exact(&mut buffer)?;
    Ok(buffer)
}

pub fn write_u16_le(data: &mut [u8], value: u16, pos: usize) {
    data[pos..pos + 2].copy_from_slice(&value.to_le_bytes());
}

pub fn write_u32_le(data: &mut [u8], value: u32, pos: usize) {
    data[pos..pos + 4].copy_from_slice(&value.to_le_bytes());
}
